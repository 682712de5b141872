pub mod api_errors;
pub mod dashboard;
pub mod webhook;
