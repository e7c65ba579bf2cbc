//! Error types for the job board
//!
//! ## Table of Contents
//! - **ApiError**: Failures reported by the hosted data/identity service
//! - **PostgrestError**: Error body returned by the REST gateway
//! - **Result**: Type alias for `Result<T, ApiError>`

use serde::Deserialize;
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Result type alias for data service operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// A row with the same unique key already exists.
    #[error("Duplicate record: {0}")]
    UniqueViolation(String),
}

impl ApiError {
    /// Whether the store rejected the write because of a uniqueness constraint.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, ApiError::UniqueViolation(_))
    }

    /// Classify a non-2xx response from the REST or auth gateway.
    ///
    /// The error body is inspected before the status so that a unique
    /// violation is recognised whichever status the gateway chose for it.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<PostgrestError>(body).ok();

        if let Some(err) = &parsed {
            if err.code.as_deref() == Some(UNIQUE_VIOLATION_CODE) {
                return ApiError::UniqueViolation(err.describe());
            }
        }

        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Server {
                status,
                message: parsed.map(|e| e.describe()).unwrap_or_else(|| body.to_string()),
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Deserialize(err.to_string())
    }
}

/// Error payload produced by PostgREST and GoTrue.
///
/// GoTrue uses `error_description`/`msg` where PostgREST uses `message`,
/// so every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl PostgrestError {
    /// Best human-readable message in the payload.
    pub fn describe(&self) -> String {
        self.message
            .as_ref()
            .or(self.error_description.as_ref())
            .or(self.msg.as_ref())
            .or(self.details.as_ref())
            .cloned()
            .unwrap_or_else(|| "unknown error".to_string())
    }
}
