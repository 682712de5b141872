pub mod change_feed;
pub mod ingest;
pub mod order_builder;
pub mod roi;
