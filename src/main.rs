mod agent;
mod config;
mod errors;
mod models;
mod routes;
mod service;

use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::OpenRouterAgent;
use crate::config::Settings;
use crate::routes::api_router;
use crate::service::chat_service::ChatService;
use crate::service::resume_service::ResumeService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_chat=debug,tower_http=debug".into()),
        )
        .init();

    let settings = Settings::from_env()?;

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let resume = ResumeService::load(&settings.resume_path)?;
    info!(
        "Loaded résumé for {} from {}",
        resume.candidate_name(),
        settings.resume_path.display()
    );

    let agent = OpenRouterAgent::new(&settings)?;
    let chat_service = ChatService::new(resume, Arc::new(agent));

    // ── Router ────────────────────────────────────────────────────────────────
    let app = api_router(chat_service)
        .layer(cors_layer(&settings.allowed_origins))
        .layer(TraceLayer::new_for_http());

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Listening on http://{addr}/ (model {})",
        settings.openrouter_model
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Anonymous sessions travel in the body, so no credentials are allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
