//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every body carries a
//! human-readable `message`.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::{
        api::ErrorDto,
        resource::{BlockingTripDto, ResourceInUseDto},
    },
    server::{
        error::{auth::AuthError, config::ConfigError},
        model::resource::BlockingTrip,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` and map to
/// 500, `AuthError` handles its own response mapping, and the remaining variants are
/// the rule violations a caller can act on.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error while binding the listener or serving connections.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error (missing field, malformed identifier, out-of-range value).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The request is valid but current state disallows it.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// A resource cannot be deleted while trips still reference it.
    ///
    /// Results in 409 Conflict listing every blocking trip.
    #[error("{message}")]
    ResourceInUse {
        message: String,
        trips: Vec<BlockingTrip>,
    },
}

impl AppError {
    /// Turns a unique-index violation into `Conflict`, passing other errors through.
    ///
    /// Used after an explicit duplicate check so a concurrent insert that slips past the
    /// check still surfaces as 409.
    pub fn conflict_on_unique(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.into()),
            _ => Self::DbErr(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { message })).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` and `ResourceInUse` variants
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => message_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => message_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => message_response(StatusCode::CONFLICT, msg),
            Self::ResourceInUse { message, trips } => (
                StatusCode::CONFLICT,
                Json(ResourceInUseDto {
                    message,
                    trips: trips
                        .into_iter()
                        .map(|trip| BlockingTripDto {
                            id: trip.id,
                            name: trip.name,
                        })
                        .collect(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        message_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
