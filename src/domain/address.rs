//! Address domain entity and its request/response shapes.

use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::require_not_blank;
use crate::config::MAX_ADDRESS_TYPE_LENGTH;
use crate::errors::AppResult;

/// Address owned by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub full_address: String,
    pub address_type: Option<String>,
}

/// Validated address contents, without the owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDetails {
    pub full_address: String,
    pub address_type: Option<String>,
}

/// Address contents as sent by clients.
///
/// Used both inside a user creation request and as the body of an address
/// update. An owner id in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[schema(example = "12 Main Street, Springfield")]
    pub full_address: String,
    /// Free-form type, conventionally HOME, OFFICE or OTHER
    #[validate(length(max = MAX_ADDRESS_TYPE_LENGTH))]
    #[schema(example = "HOME", max_length = 50)]
    pub address_type: Option<String>,
}

impl AddressInput {
    pub fn validated(self) -> AppResult<AddressDetails> {
        require_not_blank(&self.full_address, "Address is required")?;
        Ok(AddressDetails {
            full_address: self.full_address,
            address_type: self.address_type,
        })
    }
}

/// Standalone address creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddress {
    /// Owning user, as a number or a numeric string
    #[serde(deserialize_with = "user_id_from_number_or_string")]
    #[schema(example = 1, value_type = i32)]
    pub user_id: i32,
    #[schema(example = "42 Harbour Road, Portsmouth")]
    pub full_address: String,
    #[validate(length(max = MAX_ADDRESS_TYPE_LENGTH))]
    #[schema(example = "OFFICE", max_length = 50)]
    pub address_type: Option<String>,
}

impl CreateAddress {
    /// Split into the owner id and the validated contents.
    pub fn validated(self) -> AppResult<(i32, AddressDetails)> {
        let details = AddressInput {
            full_address: self.full_address,
            address_type: self.address_type,
        }
        .validated()?;
        Ok((self.user_id, details))
    }
}

// Form-backed clients post the owner picked from a <select> as "3".
fn user_id_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("userId is not a number: {:?}", text))),
    }
}

/// Address as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[schema(example = 1)]
    pub address_id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "12 Main Street, Springfield")]
    pub full_address: String,
    #[schema(example = "HOME")]
    pub address_type: Option<String>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            address_id: address.id,
            user_id: address.user_id,
            full_address: address.full_address,
            address_type: address.address_type,
        }
    }
}
