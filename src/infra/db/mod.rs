//! Connection pool and schema management for the user store.

use std::collections::HashSet;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    EntityTrait, Statement,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// One known migration and whether the store has recorded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Handle to the pooled sea-orm connection.
#[derive(Clone)]
pub struct Database {
    pool: DatabaseConnection,
}

impl Database {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let database = Self::open(config).await?;
        database.migrate_up().await?;
        tracing::info!(
            max_connections = config.database_max_connections,
            "User store ready"
        );

        Ok(database)
    }

    /// Open the pool and leave the schema as it is.
    pub async fn open(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.database_max_connections)
            .sqlx_logging(false);

        Ok(Self {
            pool: SeaDatabase::connect(options).await?,
        })
    }

    /// Cloned pool handle; clones share the same connections.
    pub fn pool(&self) -> DatabaseConnection {
        self.pool.clone()
    }

    pub async fn migrate_up(&self) -> Result<(), DbErr> {
        Migrator::up(&self.pool, None).await
    }

    /// Revert the most recently applied migration.
    pub async fn migrate_down(&self) -> Result<(), DbErr> {
        Migrator::down(&self.pool, Some(1)).await
    }

    /// Every migration the binary knows about, in apply order.
    pub async fn migrations(&self) -> Result<Vec<MigrationState>, DbErr> {
        let recorded: HashSet<String> = seaql_migrations::Entity::find()
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|migration| MigrationState {
                name: migration.name().to_string(),
                applied: recorded.contains(migration.name()),
            })
            .collect())
    }

    /// Drop `user_master` and `user_addresses`, then rebuild them empty.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.pool).await
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.pool.get_database_backend();
        self.pool
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await
            .map(|_| ())
    }
}
