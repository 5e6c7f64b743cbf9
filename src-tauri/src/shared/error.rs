//! Error taxonomy for the translation backend.
//!
//! Every command returns `AppResult<T>`. Variants serialize with a
//! `type`/`message` shape so the frontend can branch on the kind of failure
//! and show the matching user-facing message.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Rejected before any side effect: empty or too-long input, unknown
    /// language code, or a request arriving while one is in flight.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport-level failure: offline, connection refused, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered but not usefully: non-2xx status, malformed
    /// payload, unsupported language pair.
    #[error("Translation service error: {0}")]
    Service(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AppError::Network(err.to_string())
        } else {
            AppError::Service(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Service(format!("Malformed response: {}", err))
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Unknown(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Unknown(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
