use thiserror::Error;

/// Failure of the underlying transport before any HTTP status was seen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Why a single chat exchange failed. The `Display` output is exactly what
/// the thread shows in its error banner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    // ── Transport-class ──────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Malformed(String),

    // ── Application-level ────────────────────────────────────────────────────
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => d.clone(),
        None => format!("HTTP {status}"),
    }
}

impl ChatError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport(_) | ChatError::Malformed(_))
    }
}

impl From<TransportError> for ChatError {
    fn from(err: TransportError) -> Self {
        ChatError::Transport(err.0)
    }
}
