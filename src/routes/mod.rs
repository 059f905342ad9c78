//! Router composition. [`app`] is the single entry point: it takes the store handle and
//! returns the full service, so tests can build isolated instances.

mod common;
mod products;

pub use common::common_routes;
pub use products::{product_routes, PRODUCTS_BASE_PATH};

use crate::docs::docs_routes;
use crate::settings::Settings;
use crate::state::AppState;
use crate::store::ProductStore;
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn app(store: Arc<dyn ProductStore>, settings: &Settings) -> Router {
    let state = AppState::new(store, settings.page_size);
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .nest(PRODUCTS_BASE_PATH, product_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(settings.body_limit)),
        )
}
