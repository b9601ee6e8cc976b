//! Domain layer - Core business entities and logic
//!
//! Users, their addresses, and the rules their inputs must satisfy before
//! anything reaches the database. No dependency on infrastructure.

pub mod address;
pub mod password;
pub mod user;
pub mod validation;

pub use address::{Address, AddressDetails, AddressInput, AddressResponse, CreateAddress};
pub use password::Password;
pub use user::{CreateUser, NewUser, UpdateUser, User, UserChanges, UserResponse};
