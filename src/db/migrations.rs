use sqlx::{Pool, Postgres};
use tracing::info;

/// Run all pending database migrations
///
/// The SQL files under `migrations/` are embedded at compile time. Safe to
/// run repeatedly, sqlx records which migrations have been applied.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations").run(pool).await?;

    info!("Database migrations completed successfully");
    Ok(())
}
