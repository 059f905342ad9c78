//! Product handlers: list, read, create, full update, availability toggle, delete.
//!
//! Each handler validates its route's rule set, performs exactly one store call and wraps the
//! result in the response envelope.

use crate::error::{AppError, ErrorBody, ValidationErrorBody};
use crate::extractors::JsonObject;
use crate::model::docs::{CreateProductRequest, UpdateProductRequest};
use crate::model::{ListQuery, NewProduct, ProductChanges};
use crate::response::{
    message, success_many, success_one, success_one_ok, MessageBody, ProductBody, ProductListBody,
};
use crate::state::AppState;
use crate::validation::{
    id_params, RequestInput, RuleSet, CREATE_PRODUCT, PRODUCT_ID, UPDATE_PRODUCT,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};

/// Check the route's rules against the raw id and body. On success returns the id; an id that
/// is an integer but does not fit in 64 bits cannot name a row, so it is reported as not found.
fn validated_id(rules: &RuleSet, raw_id: &str, body: &Map<String, Value>) -> Result<i64, AppError> {
    let params = id_params(raw_id);
    rules.enforce(&RequestInput { params: &params, body })?;
    raw_id.parse().map_err(|_| AppError::NotFound)
}

/// List products, cheapest first
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Products ordered by price", body = ProductListBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .store
        .find_all(ListQuery {
            limit: state.page_size,
        })
        .await?;
    Ok(success_many(rows))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductBody),
        (status = 400, description = "Invalid id", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validated_id(&PRODUCT_ID, &raw_id, &Map::new())?;
    let product = state.store.find_by_key(id).await?.ok_or(AppError::NotFound)?;
    Ok(success_one_ok(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductBody),
        (status = 400, description = "Validation failed", body = ValidationErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let params = Map::new();
    CREATE_PRODUCT.enforce(&RequestInput { params: &params, body: &body })?;
    let product = state.store.create(NewProduct::from_body(&body)).await?;
    tracing::info!(id = product.id, "created product");
    Ok(success_one(product))
}

/// Replace a product's name, price and availability
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductBody),
        (status = 400, description = "Invalid id or validation failed", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let id = validated_id(&UPDATE_PRODUCT, &raw_id, &body)?;
    let product = state
        .store
        .update(id, ProductChanges::from_body(&body))
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id, "updated product");
    Ok(success_one_ok(product))
}

/// Flip a product's availability. Any request body is ignored.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Availability toggled", body = ProductBody),
        (status = 400, description = "Invalid id", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validated_id(&PRODUCT_ID, &raw_id, &Map::new())?;
    let product = state
        .store
        .toggle_availability(id)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id, availability = product.availability, "toggled availability");
    Ok(success_one_ok(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageBody),
        (status = 400, description = "Invalid id", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validated_id(&PRODUCT_ID, &raw_id, &Map::new())?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "deleted product");
    Ok(message("Product deleted"))
}
