//! Unit of Work pattern implementation.
//!
//! SOLID (SRP): Manages transaction lifecycle and repository access.
//!
//! Every write in the application goes through [`UnitOfWork::transaction`]:
//! a user and the addresses submitted with it commit together, and deleting
//! a user removes its addresses in the same transaction.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::{user_address, user_master};
use super::repositories::{
    AddressRepository, AddressStore, Connected, DeleteRepository, ReadRepository, UserRepository,
    UserStore,
};
use crate::domain::{Address, AddressDetails, NewUser, User, UserChanges};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the read repositories or run against SQLite.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn addresses(&self) -> Arc<dyn AddressRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed when the closure returns `Ok` and rolled
    /// back when it returns `Err`.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    pub fn addresses(&self) -> TxAddressRepository<'_> {
        TxAddressRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    address_repo: Arc<AddressStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let address_repo = Arc::new(AddressStore::new(db.clone()));
        Self {
            db,
            user_repo,
            address_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.address_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl Connected for TxUserRepository<'_> {
    type Conn = DatabaseTransaction;

    fn conn(&self) -> &DatabaseTransaction {
        self.txn
    }
}

impl ReadRepository<user_master::Entity> for TxUserRepository<'_> {}
impl DeleteRepository<user_master::Entity> for TxUserRepository<'_> {}

impl TxUserRepository<'_> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.find_model(id).await?.map(User::from))
    }

    /// Insert a user; its registration time is now.
    ///
    /// # Errors
    /// [`AppError::Conflict`] if the username is taken.
    pub async fn create(&self, user: &NewUser) -> AppResult<User> {
        let active_model = user_master::ActiveModel {
            user_name: Set(user.user_name.clone()),
            user_password: Set(user.password.as_str().to_string()),
            user_phone_number: Set(user.phone_number.clone()),
            date_of_registration: Set(Utc::now()),
            status: Set(user.status.clone()),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(|e| AppError::unique_violation(e, "Username"))?;

        Ok(User::from(model))
    }

    /// Overwrite every mutable column of user `id`.
    ///
    /// # Errors
    /// [`AppError::NotFound`] if the user does not exist,
    /// [`AppError::Conflict`] if the username belongs to another user.
    pub async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User> {
        let existing = self
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        let mut active: user_master::ActiveModel = existing.into();
        active.user_name = Set(changes.user_name);
        active.user_password = Set(changes.password.into_string());
        active.user_phone_number = Set(changes.phone_number);
        active.status = Set(changes.status);

        let model = active
            .update(self.txn)
            .await
            .map_err(|e| AppError::unique_violation(e, "Username"))?;

        Ok(User::from(model))
    }

    /// Returns false if no such user.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        self.delete_model(id).await
    }
}

/// Transaction-aware address repository.
pub struct TxAddressRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl Connected for TxAddressRepository<'_> {
    type Conn = DatabaseTransaction;

    fn conn(&self) -> &DatabaseTransaction {
        self.txn
    }
}

impl ReadRepository<user_address::Entity> for TxAddressRepository<'_> {}
impl DeleteRepository<user_address::Entity> for TxAddressRepository<'_> {}

impl TxAddressRepository<'_> {
    /// Insert an address owned by `user_id`.
    ///
    /// # Errors
    /// [`AppError::NotFound`] if the owner does not exist.
    pub async fn create(&self, user_id: i32, details: AddressDetails) -> AppResult<Address> {
        let active_model = user_address::ActiveModel {
            user_id: Set(user_id),
            full_address: Set(details.full_address),
            address_type: Set(details.address_type),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(|e| AppError::missing_reference(e, "User", user_id))?;

        Ok(Address::from(model))
    }

    /// Overwrite the contents of address `id`. The owner never changes.
    pub async fn update(&self, id: i32, details: AddressDetails) -> AppResult<Address> {
        let existing = self
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::not_found("Address", id))?;

        let mut active: user_address::ActiveModel = existing.into();
        active.full_address = Set(details.full_address);
        active.address_type = Set(details.address_type);

        let model = active.update(self.txn).await?;
        Ok(Address::from(model))
    }

    /// Returns false if no such address.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        self.delete_model(id).await
    }

    /// Remove every address owned by `user_id`, returning how many were removed.
    pub async fn delete_by_user(&self, user_id: i32) -> AppResult<u64> {
        let result = user_address::Entity::delete_many()
            .filter(user_address::Column::UserId.eq(user_id))
            .exec(self.txn)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
