use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Successful response from `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: String,
}

/// Failure body. `detail` is usually a string but validation layers may send
/// a list of objects, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail, if the body carried a non-empty string.
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_missing_session_id() {
        let req = ChatRequest {
            message: "hi".into(),
            session_id: None,
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"message":"hi"}"#);
    }

    #[test]
    fn detail_text_ignores_non_string_details() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","message"],"msg":"too short"}]}"#)
                .unwrap();
        assert_eq!(body.detail_text(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"detail":"model unavailable"}"#).unwrap();
        assert_eq!(body.detail_text(), Some("model unavailable"));
    }
}
