//! Storage faults, ambient routes and bootstrap behaviour.

mod common;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{send_request, TestApp};
use http_body_util::BodyExt;
use product_api::{
    app, db, AppError, ListQuery, NewProduct, PgProductStore, Product, ProductChanges, ProductStore,
    ProductSummary, Settings,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Store whose every call fails the way a dropped database connection does.
struct FailingStore;

fn storage_down() -> AppError {
    AppError::Db(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn find_by_key(&self, _id: i64) -> Result<Option<Product>, AppError> {
        Err(storage_down())
    }

    async fn find_all(&self, _query: ListQuery) -> Result<Vec<ProductSummary>, AppError> {
        Err(storage_down())
    }

    async fn create(&self, _fields: NewProduct) -> Result<Product, AppError> {
        Err(storage_down())
    }

    async fn update(&self, _id: i64, _fields: ProductChanges) -> Result<Option<Product>, AppError> {
        Err(storage_down())
    }

    async fn toggle_availability(&self, _id: i64) -> Result<Option<Product>, AppError> {
        Err(storage_down())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(storage_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(storage_down())
    }
}

fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn storage_faults_surface_as_500() {
    let router = app(Arc::new(FailingStore), &Settings::default());
    let valid = json!({ "name": "Monitor", "price": 400, "availability": true });

    let cases = [
        request("GET", "/api/products", None),
        request("GET", "/api/products/1", None),
        request("POST", "/api/products", Some(valid.clone())),
        request("PUT", "/api/products/1", Some(valid)),
        request("PATCH", "/api/products/1", None),
        request("DELETE", "/api/products/1", None),
    ];
    for req in cases {
        let (status, body) = send_request(&router, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}

#[tokio::test]
async fn validation_runs_before_storage_is_touched() {
    let router = app(Arc::new(FailingStore), &Settings::default());
    let (status, body) =
        send_request(&router, request("POST", "/api/products", Some(json!({})))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn health_and_version_are_served() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = app.send("GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "product-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn readiness_reflects_store_health() {
    let app = TestApp::new();
    let (status, body) = app.send("GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "store": "ok" }));

    let router = app_with_failing_store();
    let (status, body) = send_request(&router, request("GET", "/ready", None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "status": "degraded", "store": "unavailable" }));
}

fn app_with_failing_store() -> axum::Router {
    app(Arc::new(FailingStore), &Settings::default())
}

#[tokio::test]
async fn openapi_document_lists_product_operations() {
    let app = TestApp::new();
    let (status, doc) = app.send("GET", "/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "REST API Node.js / Express / TypeScript");
    assert_eq!(doc["info"]["version"], "1.0.0");
    let item = &doc["paths"]["/api/products/{id}"];
    for method in ["get", "put", "patch", "delete"] {
        assert!(item.get(method).is_some(), "missing {method}");
    }
    assert!(doc["paths"]["/api/products"].get("post").is_some());
    assert_eq!(doc["tags"][0]["name"], "Products");
}

#[tokio::test]
async fn docs_ui_is_served_as_html() {
    let app = TestApp::new();
    let response = app
        .router
        .clone()
        .oneshot(request("GET", "/docs", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("REST API Node.js / Express / TypeScript"));
}

#[tokio::test]
async fn unreachable_database_still_yields_a_lazy_pool() {
    let settings = Settings {
        database_url: "postgres://postgres@127.0.0.1:1/products".into(),
        acquire_timeout: Duration::from_secs(1),
        ..Settings::default()
    };
    let conn = db::connect(&settings).await.unwrap();
    assert!(!conn.connected);

    let store = PgProductStore::new(conn.pool);
    assert!(store.ping().await.is_err());
}

#[tokio::test]
async fn malformed_database_url_is_fatal() {
    let settings = Settings {
        database_url: "not a database url".into(),
        acquire_timeout: Duration::from_secs(1),
        ..Settings::default()
    };
    assert!(db::connect(&settings).await.is_err());
}
