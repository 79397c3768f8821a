//! Schema migration runner, applied at startup before the server binds.

use sqlx::PgPool;
use tracing::info;

use cesizen_core::error::{AppError, ErrorKind};

/// Apply any pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");

    info!(
        migrations = migrator.iter().count(),
        "Applying pending schema migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Schema migration failed: {e}"),
            e,
        )
    })?;

    info!("Schema is up to date");
    Ok(())
}
