pub mod cost_settings_repo;
pub mod metrics_repo;
pub mod order_repo;
