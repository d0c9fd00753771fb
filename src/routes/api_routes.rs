use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::errors::AppError;
use crate::models::{ChatRequest, HealthStatus};
use crate::service::chat_service::ChatService;

/// POST `/api/chat` — one exchange; `{reply, session_id}` or `{detail}`.
pub async fn chat_handler(
    State(svc): State<ChatService>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected chat body: {rejection}");
            return AppError::InvalidBody {
                message: rejection.body_text(),
            }
            .into_response();
        }
    };

    match svc.chat(request).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            if !err.is_validation() {
                warn!("Chat request failed: {err}");
            }
            err.into_response()
        }
    }
}

/// GET `/api/resume` — the full résumé document.
pub async fn resume_handler(State(svc): State<ChatService>) -> impl IntoResponse {
    Json(svc.resume().document().clone())
}

/// GET|HEAD `/api/health` — liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::api_router;
    use crate::service::chat_service::tests::{StubAgent, service};

    async fn call(
        agent: StubAgent,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let app = api_router(service(Arc::new(agent)));
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn chat_returns_reply_and_session() {
        let (status, body) = call(
            StubAgent::default(),
            Method::POST,
            "/api/chat",
            Some(r#"{"message":"What projects?","session_id":"abc123"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "reply": "echo: What projects?", "session_id": "abc123" })
        );
    }

    #[tokio::test]
    async fn chat_validation_failure_has_detail() {
        let (status, body) = call(
            StubAgent::default(),
            Method::POST,
            "/api/chat",
            Some(r#"{"message":"  "}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Field 'message' cannot be empty");
    }

    #[tokio::test]
    async fn malformed_body_has_detail() {
        let (status, body) = call(
            StubAgent::default(),
            Method::POST,
            "/api/chat",
            Some(r#"{"text":"hi"}"#),
        )
        .await;
        assert!(status.is_client_error());
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn agent_failure_is_bad_gateway() {
        let agent = StubAgent {
            failure: Some("upstream 429".into()),
            ..Default::default()
        };
        let (status, body) = call(
            agent,
            Method::POST,
            "/api/chat",
            Some(r#"{"message":"hi"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["detail"], "LLM service error: upstream 429");
    }

    #[tokio::test]
    async fn resume_is_served_verbatim() {
        let (status, body) = call(StubAgent::default(), Method::GET, "/api/resume", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personal"]["name"], "Alex Doe");
    }

    #[tokio::test]
    async fn health_answers_get_and_head() {
        let (status, body) = call(StubAgent::default(), Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "ok" }));

        let (status, _) = call(StubAgent::default(), Method::HEAD, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
