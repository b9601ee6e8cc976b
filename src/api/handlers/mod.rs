//! HTTP request handlers.

pub mod address_handler;
pub mod user_handler;

pub use address_handler::address_routes;
pub use user_handler::user_routes;
