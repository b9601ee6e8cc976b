//! Pooled read access to addresses.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use super::base::{Connected, ReadRepository};
use super::entities::user_address::{self, Entity as AddressEntity};
use super::entities::user_master::{self, Entity as UserEntity};
use crate::domain::Address;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>>;

    /// All addresses ordered by id
    async fn list(&self) -> AppResult<Vec<Address>>;

    /// Addresses owned by one user. Empty if the user has none or does not exist.
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Address>>;

    /// Addresses whose owner has exactly `status`, ordered by id.
    ///
    /// The owner filter is a join, so the query binds one parameter however
    /// many users match.
    async fn list_by_owner_status(&self, status: &str) -> AppResult<Vec<Address>>;
}

/// Concrete implementation of AddressRepository
pub struct AddressStore {
    db: DatabaseConnection,
}

impl AddressStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Connected for AddressStore {
    type Conn = DatabaseConnection;

    fn conn(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ReadRepository<AddressEntity> for AddressStore {}

#[async_trait]
impl AddressRepository for AddressStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        Ok(self.find_model(id).await?.map(Address::from))
    }

    async fn list(&self) -> AppResult<Vec<Address>> {
        let models = self.find_all_models().await?;
        Ok(models.into_iter().map(Address::from).collect())
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .filter(user_address::Column::UserId.eq(user_id))
            .order_by_asc(user_address::Column::AddressId)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Address::from).collect())
    }

    async fn list_by_owner_status(&self, status: &str) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .inner_join(UserEntity)
            .filter(user_master::Column::Status.eq(status))
            .order_by_asc(user_address::Column::AddressId)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Address::from).collect())
    }
}
