//! Service error types
//!
//! One enum for everything the HTTP layer can surface, with a single
//! `IntoResponse` mapping to the standard error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::rules::RulesClientError;

/// Result type alias
pub type Result<T> = std::result::Result<T, AlertError>;

#[derive(Debug, Error)]
pub enum AlertError {
    /// Rule not found; the message is the client's, untouched.
    #[error("{0}")]
    RuleNotFound(String),

    /// Request could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The license gate rejected the request.
    #[error("API access forbidden: {0}")]
    Forbidden(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RulesClientError> for AlertError {
    fn from(err: RulesClientError) -> Self {
        match err {
            // Pass the not-found message through verbatim.
            RulesClientError::NotFound { .. } => AlertError::RuleNotFound(err.to_string()),
            RulesClientError::InvalidDate(raw) => {
                AlertError::InvalidInput(format!("invalid date: {raw}"))
            }
            RulesClientError::Internal(err) => AlertError::Internal(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for AlertError {
    fn from(err: anyhow::Error) -> Self {
        AlertError::Internal(err.to_string())
    }
}

impl AlertError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AlertError::RuleNotFound(_) => StatusCode::NOT_FOUND,
            AlertError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AlertError::Forbidden(_) => StatusCode::FORBIDDEN,
            AlertError::Config(_) | AlertError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AlertError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // Internal details stay out of responses.
            AlertError::Config(_) => "Configuration error".to_string(),
            AlertError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
