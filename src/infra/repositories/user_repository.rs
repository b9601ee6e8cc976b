//! Pooled read access to users.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::base::{Connected, ReadRepository};
use super::entities::user_master::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Writes go through the transaction-scoped repository on
/// [`TransactionContext`](crate::infra::TransactionContext).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// All users ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Users whose status equals `status` exactly
    async fn list_by_status(&self, status: &str) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Connected for UserStore {
    type Conn = DatabaseConnection;

    fn conn(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ReadRepository<UserEntity> for UserStore {}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.find_model(id).await?.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = self.find_all_models().await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user_master::Column::Status.eq(status))
            .order_by_asc(user_master::Column::UserId)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
