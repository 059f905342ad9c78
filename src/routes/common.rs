//! Service status routes. Only `/ready` touches the product store.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Status {
    Ok,
    Degraded,
}

#[derive(Serialize)]
struct StatusBody {
    status: Status,
    /// Store round-trip result, present on `/ready` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: Status::Ok,
        store: None,
    })
}

async fn ready(State(state): State<AppState>) -> Response {
    let (code, status, store) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Status::Ok, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "product store is not reachable");
            (StatusCode::SERVICE_UNAVAILABLE, Status::Degraded, "unavailable")
        }
    };
    let body = StatusBody {
        status,
        store: Some(store),
    };
    (code, Json(body)).into_response()
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
