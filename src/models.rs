use serde::Serialize;

pub use resume_chat_core::models::{ChatRequest, ChatResponse};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
