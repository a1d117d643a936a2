//! REST API error types
//!
//! Every failure is rendered as the `{success:false, message}` envelope. The
//! message names only the failure category; detail goes to the log.

use crate::ResponseEnvelope;

use hr_auth::AuthError;
use hr_db::DbError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const MSG_TOKEN_MISSING: &str = "Authorization token missing";
pub const MSG_INVALID_TOKEN: &str = "Invalid or expired token";
pub const MSG_MISSING_EMPLOYEE_ID: &str = "Token missing employee_id";
pub const MSG_DATABASE: &str = "Database error.";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed (401)
    #[error("Unauthorized: {source}")]
    Unauthorized {
        #[from]
        source: AuthError,
    },

    /// Data store failed (500)
    #[error("Dependents lookup failed: {source}")]
    Database {
        #[from]
        source: DbError,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized { source } => match source {
                AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => {
                    MSG_TOKEN_MISSING
                }
                AuthError::TokenExpired { .. }
                | AuthError::IssuedInFuture { .. }
                | AuthError::JwtDecode { .. } => MSG_INVALID_TOKEN,
                AuthError::MissingClaim { .. } => MSG_MISSING_EMPLOYEE_ID,
            },
            ApiError::Database { .. } => MSG_DATABASE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Unauthorized { .. } => log::warn!("{}", self),
            ApiError::Database { .. } => log::error!("{}", self),
        }

        let body = ResponseEnvelope::failure(self.public_message());

        (self.status(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
