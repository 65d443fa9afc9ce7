//! Application-wide error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use keg_metrics::ValidationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("A calculation is already in progress")]
    Busy,

    #[error("No calculations recorded yet")]
    EmptyHistory,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons an insight could not be produced. Never shown to the user; the
/// session substitutes the fallback text instead.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("insight provider is not configured")]
    Disabled,

    #[error("insight request timed out after {0}s")]
    Timeout(u64),

    #[error("insight request cancelled")]
    Cancelled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("provider returned no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Body(rejection) => rejection.status(),
            Self::Busy => StatusCode::CONFLICT,
            Self::EmptyHistory => StatusCode::NOT_FOUND,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
