//! Shared helpers for the HTTP tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use product_api::{app, InMemoryProductStore, NewProduct, Product, ProductStore, Settings};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryProductStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let store = InMemoryProductStore::new();
        let router = app(Arc::new(store.clone()), &settings);
        Self { router, store }
    }

    pub async fn seed(&self, name: &str, price: f64) -> Product {
        self.store
            .create(NewProduct {
                name: name.to_string(),
                price,
                availability: true,
            })
            .await
            .unwrap()
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        send_request(&self.router, request).await
    }
}

pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn errors(body: &Value) -> &Vec<Value> {
    body["errors"].as_array().expect("errors array")
}
