//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AddressService, ServiceContainer, Services, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub address_service: Arc<dyn AddressService>,
    /// Used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build every service on top of the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.pool());
        Self::from_container(&container, database)
    }

    /// Take services from an already assembled container.
    pub fn from_container(container: &impl ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            user_service: container.users(),
            address_service: container.addresses(),
            database,
        }
    }
}
