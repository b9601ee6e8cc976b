//! Wiring of the user and address services.

use std::sync::Arc;

use super::{AddressManager, AddressService, UserManager, UserService};
use crate::infra::Persistence;

/// Hands out the services as trait objects.
pub trait ServiceContainer: Send + Sync {
    fn users(&self) -> Arc<dyn UserService>;

    fn addresses(&self) -> Arc<dyn AddressService>;
}

#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    address_service: Arc<dyn AddressService>,
}

impl Services {
    /// Wire every service onto one shared Unit of Work.
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            user_service: Arc::new(UserManager::new(uow.clone())),
            address_service: Arc::new(AddressManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressService> {
        self.address_service.clone()
    }
}
