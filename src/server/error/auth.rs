use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{model::api::ErrorDto, server::model::auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer credential was presented, or the `Authorization` header is malformed.
    #[error("Missing or malformed bearer credential")]
    Unauthenticated,

    /// The credential's `exp` claim is in the past.
    #[error("Bearer credential has expired")]
    Expired,

    /// Signature or claims failed verification, or the role claim names no known role.
    #[error("Invalid bearer credential: {0}")]
    InvalidCredential(String),

    /// The caller's role does not equal the role the operation requires, or the caller
    /// is acting on something owned by another user.
    #[error("User {user_id} denied: {reason}")]
    Forbidden { user_id: Uuid, reason: String },
}

impl AuthError {
    /// Builds a `Forbidden` error for a role mismatch.
    pub fn wrong_role(user_id: Uuid, required: Role) -> Self {
        Self::Forbidden {
            user_id,
            reason: format!("requires role {}", required),
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed reason is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For `Unauthenticated`, `Expired` and `InvalidCredential`
/// - 403 Forbidden - For `Forbidden`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::Expired => (StatusCode::UNAUTHORIZED, "Token has expired"),
            Self::InvalidCredential(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::Forbidden { .. } => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
