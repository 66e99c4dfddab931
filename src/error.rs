//! Application-wide error types.
//!
//! [`AppError`] covers startup and server-loop failures.  [`SubmissionError`]
//! is produced per request by the form handlers and renders itself as a JSON
//! `{ "error": ... }` response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Message returned to the caller for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal server error. Please try again or contact us directly.";

/// Why a form submission was rejected.
///
/// Every variant except [`SubmissionError::Internal`] is a client input
/// problem and maps to `400 Bad Request` with its display text as the body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("SMS consent (smsConsent) is required to process {0}")]
    ConsentRequired(&'static str),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Message must be at least {0} characters long")]
    MessageTooShort(usize),

    #[error("Message must be less than {0} characters")]
    MessageTooLong(usize),

    #[error("Invalid {0} selection")]
    InvalidChoice(&'static str),

    /// Detail is logged server-side and never sent to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SubmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmissionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            SubmissionError::Internal(detail) => {
                error!(%detail, "form submission failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
