//! OpenAPI document generated from the handler annotations, plus the Scalar UI over it.

use crate::error::{ErrorBody, ValidationErrorBody};
use crate::handlers::products;
use crate::model::docs::{CreateProductRequest, UpdateProductRequest};
use crate::model::{Product, ProductSummary};
use crate::response::{MessageBody, ProductBody, ProductListBody};
use crate::validation::{FieldError, Location};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub const OPENAPI_PATH: &str = "/docs/openapi.json";
pub const DOCS_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Node.js / Express / TypeScript",
        version = "1.0.0",
        description = "API Docs for Products"
    ),
    paths(
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::toggle_availability,
        products::delete_product,
    ),
    components(schemas(
        Product,
        ProductSummary,
        CreateProductRequest,
        UpdateProductRequest,
        ProductBody,
        ProductListBody,
        MessageBody,
        ErrorBody,
        ValidationErrorBody,
        FieldError,
        Location,
    )),
    tags((name = "Products", description = "API operations related to products"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs (interactive UI), GET /docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .merge(Scalar::with_url(DOCS_UI_PATH, ApiDoc::openapi()))
}
