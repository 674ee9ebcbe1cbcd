//! Schema migration runner.
//!
//! Migrations are embedded at compile time from the workspace `migrations/`
//! directory, so a deployed binary always carries the schema it expects.

use sqlx::PgPool;
use tracing::info;

use trackhub_core::error::{AppError, ErrorKind};

/// Bring the tracking schema (tenants through events) up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");

    info!(
        migrations = migrator.iter().count(),
        "Applying tracking schema migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Tracking schema is up to date");
    Ok(())
}
