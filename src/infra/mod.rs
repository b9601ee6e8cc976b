//! Infrastructure layer - External systems integration
//!
//! Database connection and migrations, repositories over the two tables,
//! and the Unit of Work that owns transaction boundaries.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, MigrationState, Migrator};
pub use repositories::{AddressRepository, AddressStore, UserRepository, UserStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxAddressRepository, TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAddressRepository, MockUserRepository};
