pub mod api_routes;

use axum::Router;
use axum::routing::{get, post};

use crate::service::chat_service::ChatService;
use api_routes::{chat_handler, health_handler, resume_handler};

/// All `/api` routes. Layers (CORS, tracing) are added by the caller.
pub fn api_router(svc: ChatService) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/resume", get(resume_handler))
        // `get` also answers HEAD.
        .route("/api/health", get(health_handler))
        .with_state(svc)
}
