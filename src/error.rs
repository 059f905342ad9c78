//! Typed errors and HTTP mapping.

use crate::validation::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("Product not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// `{errors: [...]}` returned when request validation fails.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

/// `{error: "..."}` returned for not-found, undecodable bodies and storage faults.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { errors })).into_response()
            }
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::new("Product not found"))).into_response()
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorBody::new("Request body too large")),
            )
                .into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
