//! Client Error Types
//!
//! Everything that can go wrong talking to the FitFusion backend.

use reqwest::StatusCode;
use thiserror::Error;

use super::dto::ErrorBody;
use crate::validation::FieldError;

/// Errors returned by [`FitnessClient`](super::FitnessClient)
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend could not be reached
    #[error("FitFusion backend unavailable")]
    Unavailable,

    /// Request took longer than the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Token missing, expired or rejected
    #[error("Not signed in or session expired")]
    Unauthorized,

    /// Login rejected
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Registration rejected because the address is taken
    #[error("Email is already registered.")]
    EmailTaken,

    /// Login succeeded but no token came back
    #[error("Login failed. Please try again.")]
    MissingToken,

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// Input rejected before sending
    #[error("Validation error: {0}")]
    Validation(#[from] FieldError),
}

impl ApiError {
    /// Classify a `reqwest` send failure
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable
        } else {
            ApiError::Request(err)
        }
    }

    /// Map a failed response to an error, using the body's message if present
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .text()
            .map(str::to_string)
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Map a failed login/registration response
    pub(crate) fn from_auth_status(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let mentions = |field: &Option<String>, needle: &str| {
            field
                .as_deref()
                .map(|text| text.to_lowercase().contains(needle))
                .unwrap_or(false)
        };

        if mentions(&parsed.error, "email") {
            ApiError::EmailTaken
        } else if mentions(&parsed.message, "invalid") {
            ApiError::InvalidCredentials
        } else if status == StatusCode::CONFLICT {
            ApiError::EmailTaken
        } else if status == StatusCode::UNAUTHORIZED {
            ApiError::InvalidCredentials
        } else {
            ApiError::Api {
                status: status.as_u16(),
                message: parsed
                    .text()
                    .unwrap_or("Something went wrong")
                    .to_string(),
            }
        }
    }

    /// Whether signing in again could fix this
    pub fn needs_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
