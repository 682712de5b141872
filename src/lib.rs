pub mod adapters;
pub mod domain;
pub mod extract;
pub mod infra;
pub mod services;

use services::change_feed::ChangeFeed;

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub changes: ChangeFeed,
}
