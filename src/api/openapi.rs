//! OpenAPI documentation, served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::{address_handler, user_handler};
use crate::domain::{AddressInput, AddressResponse, CreateAddress, CreateUser, UpdateUser, UserResponse};
use crate::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "Users and their addresses over REST"
    ),
    servers(
        (url = "http://localhost:9090", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::list_users_by_status,
        address_handler::create_address,
        address_handler::list_addresses,
        address_handler::get_address,
        address_handler::list_addresses_by_user,
        address_handler::update_address,
        address_handler::delete_address,
    ),
    components(
        schemas(
            CreateUser,
            UpdateUser,
            UserResponse,
            CreateAddress,
            AddressInput,
            AddressResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Addresses", description = "Address management operations")
    )
)]
pub struct ApiDoc;
