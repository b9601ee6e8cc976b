//! Unit of Work double for service tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    AddressRepository, MockAddressRepository, MockUserRepository, TransactionContext,
    UnitOfWork, UserRepository,
};

/// Serves reads from mocks and refuses to open transactions.
pub(crate) struct ReadOnlyUnitOfWork {
    users: Arc<MockUserRepository>,
    addresses: Arc<MockAddressRepository>,
}

impl ReadOnlyUnitOfWork {
    pub(crate) fn new(users: MockUserRepository, addresses: MockAddressRepository) -> Self {
        Self {
            users: Arc::new(users),
            addresses: Arc::new(addresses),
        }
    }
}

#[async_trait]
impl UnitOfWork for ReadOnlyUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.addresses.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test double"))
    }
}
