use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Connects eagerly so an unreachable database fails startup instead of the
/// first lookup.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
  PgPoolOptions::new()
    .max_connections(2)
    .acquire_timeout(Duration::from_secs(10))
    .connect(database_url)
    .await
}
