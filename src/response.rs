//! Response envelopes: `{data}` for products, `{message}` for deletions.

use crate::model::{Product, ProductSummary};
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProductBody {
    pub data: Product,
}

#[derive(Serialize, ToSchema)]
pub struct ProductListBody {
    pub data: Vec<ProductSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Product deleted")]
    pub message: String,
}

pub fn success_one(data: Product) -> (StatusCode, Json<ProductBody>) {
    (StatusCode::CREATED, Json(ProductBody { data }))
}

pub fn success_one_ok(data: Product) -> (StatusCode, Json<ProductBody>) {
    (StatusCode::OK, Json(ProductBody { data }))
}

pub fn success_many(data: Vec<ProductSummary>) -> (StatusCode, Json<ProductListBody>) {
    (StatusCode::OK, Json(ProductListBody { data }))
}

pub fn message(text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: text.to_string(),
        }),
    )
}
