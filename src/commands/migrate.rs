//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are applied manually here, never on connect
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let result = match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending migrations");
            db.run_migrations().await
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back the last migration");
            db.rollback_migration().await
        }
        MigrateAction::Status => return print_status(&db).await,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await
        }
    };

    result.map_err(|e| AppError::internal(e.to_string()))?;
    tracing::info!("Migration command finished");
    Ok(())
}

/// Print each known migration with its applied state
async fn print_status(db: &Database) -> AppResult<()> {
    let status = db
        .migration_status()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    for (name, applied) in status {
        println!("{}: {}", name, if applied { "applied" } else { "pending" });
    }

    Ok(())
}
