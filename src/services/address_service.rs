//! Address service - Handles address-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AddressInput, AddressResponse, CreateAddress};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Address service trait for dependency injection.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Create an address for an existing user.
    async fn create_address(&self, input: CreateAddress) -> AppResult<AddressResponse>;

    async fn list_addresses(&self) -> AppResult<Vec<AddressResponse>>;

    async fn get_address(&self, id: i32) -> AppResult<AddressResponse>;

    /// Addresses owned by `user_id`; empty when the user has none or does not exist.
    async fn list_addresses_by_user(&self, user_id: i32) -> AppResult<Vec<AddressResponse>>;

    /// Replace the full address and type. The owner is never changed.
    async fn update_address(&self, id: i32, input: AddressInput) -> AppResult<AddressResponse>;

    async fn delete_address(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AddressService using Unit of Work.
pub struct AddressManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AddressManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AddressService for AddressManager<U> {
    async fn create_address(&self, input: CreateAddress) -> AppResult<AddressResponse> {
        let (user_id, details) = input.validated()?;

        let address = with_transaction!(self.uow, |ctx| {
            ctx.users()
                .find_by_id(user_id)
                .await?
                .ok_or_not_found("User", user_id)?;
            ctx.addresses().create(user_id, details).await
        })?;

        tracing::info!(address_id = address.id, user_id, "Address created");
        Ok(address.into())
    }

    async fn list_addresses(&self) -> AppResult<Vec<AddressResponse>> {
        let addresses = self.uow.addresses().list().await?;
        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }

    async fn get_address(&self, id: i32) -> AppResult<AddressResponse> {
        self.uow
            .addresses()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Address", id)
            .map(AddressResponse::from)
    }

    async fn list_addresses_by_user(&self, user_id: i32) -> AppResult<Vec<AddressResponse>> {
        let addresses = self.uow.addresses().list_by_user(user_id).await?;
        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }

    async fn update_address(&self, id: i32, input: AddressInput) -> AppResult<AddressResponse> {
        let details = input.validated()?;

        let address =
            with_transaction!(self.uow, |ctx| ctx.addresses().update(id, details).await)?;

        tracing::info!(address_id = id, "Address updated");
        Ok(address.into())
    }

    async fn delete_address(&self, id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            if !ctx.addresses().delete(id).await? {
                return Err(AppError::not_found("Address", id));
            }
            Ok(())
        })?;

        tracing::info!(address_id = id, "Address deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::Address;
    use crate::infra::{MockAddressRepository, MockUserRepository};
    use crate::services::testing::ReadOnlyUnitOfWork;

    fn service_with(addresses: MockAddressRepository) -> AddressManager<ReadOnlyUnitOfWork> {
        AddressManager::new(Arc::new(ReadOnlyUnitOfWork::new(
            MockUserRepository::new(),
            addresses,
        )))
    }

    #[tokio::test]
    async fn test_get_address() {
        let mut addresses = MockAddressRepository::new();
        addresses.expect_find_by_id().with(eq(4)).returning(|id| {
            Ok(Some(Address {
                id,
                user_id: 1,
                full_address: "4 Privet Drive".to_string(),
                address_type: None,
            }))
        });

        let response = service_with(addresses).get_address(4).await.unwrap();
        assert_eq!(response.address_id, 4);
        assert_eq!(response.full_address, "4 Privet Drive");
    }

    #[tokio::test]
    async fn test_get_address_not_found() {
        let mut addresses = MockAddressRepository::new();
        addresses.expect_find_by_id().returning(|_| Ok(None));

        let err = service_with(addresses).get_address(8).await.unwrap_err();
        assert_eq!(err.to_string(), "Address not found with id: 8");
    }

    #[tokio::test]
    async fn test_list_by_unknown_user_is_empty() {
        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_list_by_user()
            .with(eq(404))
            .returning(|_| Ok(vec![]));

        let response = service_with(addresses)
            .list_addresses_by_user(404)
            .await
            .unwrap();
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_blank_address() {
        let input = AddressInput {
            full_address: "".to_string(),
            address_type: None,
        };

        let err = service_with(MockAddressRepository::new())
            .update_address(1, input)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
