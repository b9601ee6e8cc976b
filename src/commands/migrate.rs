//! `migrate` - manual control over the `user_master` / `user_addresses` schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::open(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.migrate_up().await?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.migrate_down().await?;
            tracing::info!("Reverted the latest migration");
        }
        MigrateAction::Status => {
            let migrations = db.migrations().await?;
            let pending = migrations.iter().filter(|m| !m.applied).count();

            for migration in &migrations {
                let mark = if migration.applied { "applied" } else { "pending" };
                println!("{:<48} {}", migration.name, mark);
            }
            tracing::info!(total = migrations.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every user and address");
            db.reset().await?;
            tracing::info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}
