//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Address, CreateUser, UpdateUser, User, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// User service trait for dependency injection.
///
/// Every user leaving the service is a [`UserResponse`], so the stored
/// password never crosses this boundary.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user together with any addresses in the request.
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse>;

    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;

    async fn get_user(&self, id: i32) -> AppResult<UserResponse>;

    /// Replace username, password, phone number and status.
    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<UserResponse>;

    /// Delete a user and every address it owns.
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    async fn list_users_by_status(&self, status: &str) -> AppResult<Vec<UserResponse>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn project(&self, user: User) -> AppResult<UserResponse> {
        let addresses = self.uow.addresses().list_by_user(user.id).await?;
        Ok(UserResponse::project(user, addresses))
    }

    /// Pair each user with its addresses from an already fetched batch.
    /// Addresses whose owner is not in `users` are dropped.
    fn project_all(users: Vec<User>, addresses: Vec<Address>) -> Vec<UserResponse> {
        let mut by_owner: HashMap<i32, Vec<Address>> = HashMap::new();
        for address in addresses {
            by_owner.entry(address.user_id).or_default().push(address);
        }

        users
            .into_iter()
            .map(|user| {
                let addresses = by_owner.remove(&user.id).unwrap_or_default();
                UserResponse::project(user, addresses)
            })
            .collect()
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        let new_user = input.validated()?;

        let (user, addresses) = with_transaction!(self.uow, |ctx| {
            let user = ctx.users().create(&new_user).await?;

            let mut addresses = Vec::with_capacity(new_user.addresses.len());
            for details in new_user.addresses {
                addresses.push(ctx.addresses().create(user.id, details).await?);
            }

            Ok((user, addresses))
        })?;

        tracing::info!(
            user_id = user.id,
            addresses = addresses.len(),
            "User created"
        );
        Ok(UserResponse::project(user, addresses))
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.uow.users().list().await?;
        let addresses = self.uow.addresses().list().await?;
        Ok(Self::project_all(users, addresses))
    }

    async fn get_user(&self, id: i32) -> AppResult<UserResponse> {
        let user = self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found("User", id)?;

        self.project(user).await
    }

    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<UserResponse> {
        let changes = input.validated()?;

        let user = with_transaction!(self.uow, |ctx| ctx.users().update(id, changes).await)?;

        tracing::info!(user_id = id, "User updated");
        self.project(user).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        let removed = with_transaction!(self.uow, |ctx| {
            let removed = ctx.addresses().delete_by_user(id).await?;
            if !ctx.users().delete(id).await? {
                return Err(AppError::not_found("User", id));
            }
            Ok(removed)
        })?;

        tracing::info!(user_id = id, addresses_removed = removed, "User deleted");
        Ok(())
    }

    async fn list_users_by_status(&self, status: &str) -> AppResult<Vec<UserResponse>> {
        let users = self.uow.users().list_by_status(status).await?;
        let addresses = self.uow.addresses().list_by_owner_status(status).await?;
        Ok(Self::project_all(users, addresses))
    }
}
