//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into HTTP responses. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for uniform error handling in API endpoints. Every error
//! body has the shape `{"success": false, "error": "..."}`.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, validation::ValidationError},
    model::api::ErrorDto,
    service::geocoder::GeocodeError,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for
/// automatic error conversion. Validation and geocoding errors carry their own
/// status mapping; everything else is a 500 with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only occurs before the server is listening, so it never turns into a
    /// response in practice.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request payload failed validation.
    ///
    /// Results in 400 Bad Request with the validation message.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Geocoding collaborator failure.
    ///
    /// Results in 502 Bad Gateway; the upstream failure is surfaced to the
    /// caller rather than retried.
    #[error(transparent)]
    GeocodeErr(#[from] GeocodeError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, e.g. binding the listener or reading the seed fixture file.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON error while parsing the seed fixture file.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response
/// body. Internal errors are logged with full details but return generic
/// messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr`
/// - 404 Not Found - For `NotFound`
/// - 502 Bad Gateway - For `GeocodeErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::GeocodeErr(err) => {
                tracing::error!("Geocoding failure: {}", err);
                (StatusCode::BAD_GATEWAY, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic "Internal server error" body
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error".to_string())),
        )
            .into_response()
    }
}
