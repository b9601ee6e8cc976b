//! Address handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{AddressInput, AddressResponse, CreateAddress};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create address routes, nested under `/api/addresses`
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route(
            "/:id",
            get(get_address).put(update_address).delete(delete_address),
        )
        .route("/user/:user_id", get(list_addresses_by_user))
}

#[utoipa::path(
    post,
    path = "/api/addresses",
    tag = "Addresses",
    request_body = CreateAddress,
    responses(
        (status = 201, description = "Address created", body = AddressResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Owning user not found")
    )
)]
pub async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAddress>,
) -> AppResult<Created<AddressResponse>> {
    let address = state.address_service.create_address(payload).await?;
    Ok(Created(address))
}

#[utoipa::path(
    get,
    path = "/api/addresses",
    tag = "Addresses",
    responses(
        (status = 200, description = "List of addresses", body = Vec<AddressResponse>)
    )
)]
pub async fn list_addresses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AddressResponse>>> {
    let addresses = state.address_service.list_addresses().await?;
    Ok(Json(addresses))
}

#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address found", body = AddressResponse),
        (status = 404, description = "Address not found")
    )
)]
pub async fn get_address(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.get_address(id).await?;
    Ok(Json(address))
}

/// Addresses of one user; empty when the user does not exist
#[utoipa::path(
    get,
    path = "/api/addresses/user/{user_id}",
    tag = "Addresses",
    params(
        ("user_id" = i32, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Addresses of the user", body = Vec<AddressResponse>)
    )
)]
pub async fn list_addresses_by_user(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> AppResult<Json<Vec<AddressResponse>>> {
    let addresses = state.address_service.list_addresses_by_user(user_id).await?;
    Ok(Json(addresses))
}

/// Replace the full address and type; the owner stays the same
#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    request_body = AddressInput,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(payload): ValidatedJson<AddressInput>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.update_address(id, payload).await?;
    Ok(Json(address))
}

#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address deleted", body = MessageResponse),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete_address(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.address_service.delete_address(id).await?;
    Ok(Json(MessageResponse::new("Address deleted successfully")))
}
