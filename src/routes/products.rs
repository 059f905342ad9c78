//! Product routes, mounted under `/api/products`.

use crate::handlers::products::{
    create_product, delete_product, get_product, list_products, toggle_availability, update_product,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const PRODUCTS_BASE_PATH: &str = "/api/products";

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(state)
}
