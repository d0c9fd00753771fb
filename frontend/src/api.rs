use async_trait::async_trait;
use gloo_net::http::Request;
use resume_chat_core::{ChatRequest, ChatTransport, TransportError, TransportResponse};

use crate::models::Resume;

/// Base URL of the backend API server.
pub const API_BASE: &str = match option_env!("RESUME_CHAT_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8000",
};

/// Fetches the résumé document once at startup.
pub async fn fetch_resume() -> Result<Resume, String> {
    let resp = Request::get(&format!("{API_BASE}/api/resume"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json::<Resume>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

/// `POST /api/chat` over the browser's fetch API.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base: &'static str,
}

impl GlooTransport {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }
}

#[async_trait(?Send)]
impl ChatTransport for GlooTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<TransportResponse, TransportError> {
        let resp = Request::post(&format!("{}/api/chat", self.base))
            .json(request)
            .map_err(|e| TransportError::new(format!("could not encode request: {e}")))?
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(TransportResponse::new(status, body))
    }
}
