//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod user_address;
pub mod user_master;
