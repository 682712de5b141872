pub mod fields;
pub mod items;
pub mod method;
pub mod paths;
pub mod value;
