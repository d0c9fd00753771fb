use async_trait::async_trait;

use crate::errors::{ChatError, TransportError};
use crate::models::{ChatRequest, ChatResponse, ErrorBody};
use crate::session::{SessionIdentity, SessionStore};
use crate::thread::{Message, ThreadStore};

/// Raw HTTP result handed back by a transport. Interpreting the status and
/// body is the dispatcher's job, so every transport behaves the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues `POST /api/chat`. Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<TransportResponse, TransportError>;
}

/// Which path a [`Dispatcher::send`] call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank text, or a request was already in flight. Nothing changed.
    Ignored,
    Replied,
    Failed,
}

/// Turns a raw response into either the parsed reply or the error to show.
pub fn interpret(response: TransportResponse) -> Result<ChatResponse, ChatError> {
    if response.is_success() {
        return serde_json::from_str::<ChatResponse>(&response.body)
            .map_err(|e| ChatError::Malformed(e.to_string()));
    }

    let detail = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.detail_text().map(str::to_string));
    Err(ChatError::Status {
        status: response.status,
        detail,
    })
}

/// Clears the busy flag however `send` exits.
struct BusyGuard<'a, T: ThreadStore> {
    thread: &'a T,
}

impl<T: ThreadStore> Drop for BusyGuard<'_, T> {
    fn drop(&mut self) {
        self.thread.set_busy(false);
    }
}

/// Sends user text to the completion endpoint and reconciles the result into
/// the thread. At most one request is in flight; overlapping sends are dropped.
#[derive(Clone, Debug)]
pub struct Dispatcher<S, T, X> {
    session: SessionIdentity<S>,
    thread: T,
    transport: X,
}

impl<S, T, X> Dispatcher<S, T, X>
where
    S: SessionStore,
    T: ThreadStore,
    X: ChatTransport,
{
    pub fn new(session: S, thread: T, transport: X) -> Self {
        Self {
            session: SessionIdentity::new(session),
            thread,
            transport,
        }
    }

    pub fn thread(&self) -> &T {
        &self.thread
    }

    pub fn session(&self) -> &SessionIdentity<S> {
        &self.session
    }

    pub fn transport(&self) -> &X {
        &self.transport
    }

    /// Runs one exchange. Failures end up in the thread's error field and are
    /// never returned to the caller.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }
        if self.thread.is_busy() {
            log::debug!("Dropping message sent while a reply is pending");
            return SendOutcome::Ignored;
        }

        // Optimistic; never rolled back.
        self.thread.append(Message::user(text));
        self.thread.set_busy(true);
        let _busy = BusyGuard {
            thread: &self.thread,
        };
        self.thread.set_error(None);

        let request = ChatRequest {
            message: text.to_string(),
            session_id: Some(self.session.get_or_create_id()),
        };
        log::debug!("Dispatching chat message ({} chars)", request.message.len());

        match self.exchange(&request).await {
            Ok(response) => {
                self.session.adopt(&response.session_id);
                self.thread.append(Message::assistant(response.reply));
                SendOutcome::Replied
            }
            Err(err) => {
                log::warn!("Chat request failed: {err}");
                self.thread.set_error(Some(err.to_string()));
                SendOutcome::Failed
            }
        }
    }

    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let response = self.transport.post_chat(request).await?;
        interpret(response)
    }
}
