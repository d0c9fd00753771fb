use crate::dispatcher::{ChatTransport, Dispatcher, SendOutcome};
use crate::highlight::follow_up_prompt;
use crate::session::SessionStore;
use crate::thread::ThreadStore;

/// Prompts offered on an empty, idle thread. Sent verbatim when chosen.
pub const STARTER_PROMPTS: &[&str] = &[
    "What projects has he worked on?",
    "What are his technical skills?",
    "Tell me about his education",
    "What does he do in his free time?",
];

/// Visibility hooks owned by the host UI.
pub trait ChatSurface {
    /// Opens the chat panel if it is collapsed or hidden.
    fn ensure_chat_visible(&self);
    /// Switches to the chat tab on layouts that show one section at a time.
    fn ensure_chat_tab_active(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSurface;

impl ChatSurface for NoopSurface {
    fn ensure_chat_visible(&self) {}
    fn ensure_chat_tab_active(&self) {}
}

/// Entry point for anything outside the chat panel that wants to put a
/// message into the conversation.
#[derive(Clone, Debug)]
pub struct ChatBus<S, T, X, V> {
    dispatcher: Dispatcher<S, T, X>,
    surface: V,
}

impl<S, T, X, V> ChatBus<S, T, X, V>
where
    S: SessionStore,
    T: ThreadStore,
    X: ChatTransport,
    V: ChatSurface,
{
    pub fn new(dispatcher: Dispatcher<S, T, X>, surface: V) -> Self {
        Self {
            dispatcher,
            surface,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<S, T, X> {
        &self.dispatcher
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Forwards to [`Dispatcher::send`] without touching visibility.
    pub async fn request_message(&self, text: &str) -> SendOutcome {
        self.dispatcher.send(text).await
    }

    /// Brings the thread into view, then sends `text`.
    pub async fn ask(&self, text: &str) -> SendOutcome {
        self.surface.ensure_chat_visible();
        self.surface.ensure_chat_tab_active();
        self.request_message(text).await
    }

    /// Follow-up for a tagged token in an assistant reply.
    pub async fn activate_tag(&self, token: &str) -> SendOutcome {
        self.ask(&follow_up_prompt(token)).await
    }

    pub async fn choose_suggestion(&self, prompt: &str) -> SendOutcome {
        self.ask(prompt).await
    }

    /// Starter prompts to show right now; empty once the thread has started.
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.dispatcher.thread().snapshot().show_suggestions() {
            STARTER_PROMPTS
        } else {
            &[]
        }
    }
}
