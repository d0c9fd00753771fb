use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One utterance in the thread. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadState {
    pub messages: Vec<Message>,
    pub busy: bool,
    pub error: Option<String>,
}

impl ThreadState {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Starter prompts are offered only on an idle, empty thread.
    pub fn show_suggestions(&self) -> bool {
        self.messages.is_empty() && !self.busy
    }
}

/// Append-only message log plus the in-flight flag and last error.
///
/// Methods take `&self`; implementations use interior mutability because the
/// store is shared between the dispatcher and whatever renders it.
pub trait ThreadStore {
    fn append(&self, message: Message);
    fn set_busy(&self, busy: bool);
    fn set_error(&self, error: Option<String>);
    fn snapshot(&self) -> ThreadState;

    fn is_busy(&self) -> bool {
        self.snapshot().busy
    }

    /// Hides the error banner. Messages are left alone.
    fn dismiss_error(&self) {
        self.set_error(None);
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryThreadStore {
    state: Rc<RefCell<ThreadState>>,
}

impl MemoryThreadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThreadStore for MemoryThreadStore {
    fn append(&self, message: Message) {
        self.state.borrow_mut().messages.push(message);
    }

    fn set_busy(&self, busy: bool) {
        self.state.borrow_mut().busy = busy;
    }

    fn set_error(&self, error: Option<String>) {
        self.state.borrow_mut().error = error;
    }

    fn snapshot(&self) -> ThreadState {
        self.state.borrow().clone()
    }

    fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }
}
