use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Top-level application error. Every variant renders as `{"detail": "..."}`
/// with a matching status code.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Startup errors ───────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Résumé not found at {path}")]
    ResumeMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Résumé at {path} is not valid JSON: {source}")]
    ResumeInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ── AI Agent errors ──────────────────────────────────────────────────────
    #[error("LLM service error: {message}")]
    InferenceError { message: String },

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("Field '{field_name}' exceeds max length of {max_length} (actual: {actual_length})")]
    FieldTooLong {
        field_name: String,
        max_length: usize,
        actual_length: usize,
    },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyField { .. }
                | AppError::FieldTooLong { .. }
                | AppError::InvalidBody { .. }
        )
    }

    pub fn is_agent_failure(&self) -> bool {
        matches!(self, AppError::InferenceError { .. })
    }

    pub fn status(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else if self.is_agent_failure() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
