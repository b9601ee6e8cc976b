//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod address_repository;
mod base;
pub(crate) mod entities;
mod user_repository;

pub use address_repository::{AddressRepository, AddressStore};
pub use base::{Connected, DeleteRepository, ReadRepository};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use address_repository::MockAddressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
