//! User Management - a REST backend for users and their addresses.
//!
//! Users own any number of addresses. Usernames are unique, deleting a user
//! deletes its addresses, and stored passwords never leave the service.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, request/response shapes and input rules
//! - **services**: Use cases, run through the Unit of Work
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! cargo run -- serve --port 9090
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Address, Password, User};
pub use errors::{AppError, AppResult};
