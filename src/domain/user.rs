//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::address::{Address, AddressDetails, AddressInput, AddressResponse};
use super::password::Password;
use super::validation::{require_not_blank, require_phone_number};
use crate::config::{MAX_STATUS_LENGTH, MAX_USER_NAME_LENGTH, PASSWORD_MASK, STATUS_ACTIVE};
use crate::errors::AppResult;

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub password: Password,
    pub phone_number: String,
    pub date_of_registration: DateTime<Utc>,
    pub status: String,
}

/// Validated user ready for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub password: Password,
    pub phone_number: String,
    pub status: String,
    pub addresses: Vec<AddressDetails>,
}

/// Validated replacement values for an existing user
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub user_name: String,
    pub password: Password,
    pub phone_number: String,
    pub status: String,
}

/// User creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(max = MAX_USER_NAME_LENGTH))]
    #[schema(example = "alice", max_length = 100)]
    pub user_name: String,
    #[schema(example = "p1")]
    pub user_password: String,
    /// Exactly 10 digits
    #[schema(example = "1234567890", pattern = "^[0-9]{10}$")]
    pub user_phone_number: String,
    /// Defaults to ACTIVE when omitted
    #[validate(length(max = MAX_STATUS_LENGTH))]
    #[schema(example = "ACTIVE", max_length = 20)]
    pub status: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<AddressInput>,
}

impl CreateUser {
    /// Apply field rules, hash the password and fill in the default status.
    pub fn validated(self) -> AppResult<NewUser> {
        require_not_blank(&self.user_name, "Username is required")?;
        require_phone_number(&self.user_phone_number)?;

        let status = match self.status {
            Some(status) => {
                require_not_blank(&status, "Status is required")?;
                status
            }
            None => STATUS_ACTIVE.to_string(),
        };

        let addresses = self
            .addresses
            .into_iter()
            .map(AddressInput::validated)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(NewUser {
            user_name: self.user_name,
            password: Password::new(&self.user_password)?,
            phone_number: self.user_phone_number,
            status,
            addresses,
        })
    }
}

/// User replacement request; every field is overwritten
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(max = MAX_USER_NAME_LENGTH))]
    #[schema(example = "alice", max_length = 100)]
    pub user_name: String,
    #[schema(example = "n3wP4ss")]
    pub user_password: String,
    #[schema(example = "0987654321", pattern = "^[0-9]{10}$")]
    pub user_phone_number: String,
    #[validate(length(max = MAX_STATUS_LENGTH))]
    #[schema(example = "INACTIVE", max_length = 20)]
    pub status: String,
}

impl UpdateUser {
    pub fn validated(self) -> AppResult<UserChanges> {
        require_not_blank(&self.user_name, "Username is required")?;
        require_phone_number(&self.user_phone_number)?;
        require_not_blank(&self.status, "Status is required")?;

        Ok(UserChanges {
            user_name: self.user_name,
            password: Password::new(&self.user_password)?,
            phone_number: self.user_phone_number,
            status: self.status,
        })
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "alice")]
    pub user_name: String,
    /// Always the mask, never the stored value
    #[schema(example = "******")]
    pub user_password: String,
    #[schema(example = "1234567890")]
    pub user_phone_number: String,
    pub date_of_registration: DateTime<Utc>,
    #[schema(example = "ACTIVE")]
    pub status: String,
    pub addresses: Vec<AddressResponse>,
}

impl UserResponse {
    /// Project a user and the addresses it owns.
    pub fn project(user: User, addresses: Vec<Address>) -> Self {
        Self {
            user_id: user.id,
            user_name: user.user_name,
            user_password: PASSWORD_MASK.to_string(),
            user_phone_number: user.phone_number,
            date_of_registration: user.date_of_registration,
            status: user.status,
            addresses: addresses.into_iter().map(AddressResponse::from).collect(),
        }
    }
}
