//! API error handling module
//!
//! Provides a unified error type for all API endpoints with structured error variants.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// API error type with structured variants for different error categories
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request - client provided invalid input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Login failure - unknown email or wrong password, deliberately
    /// indistinguishable so callers cannot probe for registered accounts
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Authentication error with specific error code
    #[error("{message}")]
    AuthError { message: String, code: String },

    /// Not found - requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error - unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Database error - failure from the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an authentication error with a specific error code
    pub fn auth_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AuthError {
            message: message.into(),
            code: code.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::AuthError { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic error handling
    fn error_code(&self) -> &str {
        match self {
            Self::BadRequest(_) => "INVALID_INPUT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AuthError { code, .. } => code,
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Get sanitized error message for client response
    fn client_message(&self) -> String {
        match self {
            // Persistence failures are logged with full detail but never
            // echoed to the caller
            Self::Database(_) => "A database error occurred".to_string(),
            _ => self.to_string(),
        }
    }

    /// Get the error category for logging
    fn error_category(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::InvalidCredentials => "invalid_credentials",
            Self::AuthError { .. } => "auth_error",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
            Self::Database(_) => "database",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.error_category();
        let code = self.error_code().to_string();
        let internal_message = self.to_string();
        let client_message = self.client_message();

        // Log based on severity, always including internal details
        match &self {
            Self::BadRequest(_) | Self::NotFound(_) => {
                tracing::warn!(
                    status = %status,
                    category = category,
                    code = %code,
                    error = %internal_message,
                    "Client error"
                );
            }
            Self::InvalidCredentials | Self::AuthError { .. } => {
                tracing::warn!(
                    status = %status,
                    category = category,
                    code = %code,
                    error = %internal_message,
                    "Authentication error"
                );
            }
            Self::Internal(_) | Self::Database(_) => {
                tracing::error!(
                    status = %status,
                    category = category,
                    code = %code,
                    error = %internal_message,
                    client_message = %client_message,
                    "Server error (internal details logged)"
                );
            }
        }

        // All error responses include a `code` field for programmatic error handling
        let body = serde_json::json!({
            "error": client_message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}
