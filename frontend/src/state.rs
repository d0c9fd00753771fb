use leptos::prelude::*;
use leptos::task::spawn_local;
use resume_chat_core::{ChatBus, ChatSurface, Dispatcher, Message, ThreadState, ThreadStore};

use crate::api::{self, GlooTransport};
use crate::models::Resume;
use crate::storage::BrowserSessionStore;

/// Sections on narrow layouts, where only one is visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Profile,
    Chat,
}

/// Thread store backed by signals so the chat view re-renders on change.
#[derive(Clone, Copy)]
pub struct SignalThreadStore {
    pub messages: RwSignal<Vec<Message>>,
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ThreadStore for SignalThreadStore {
    fn append(&self, message: Message) {
        self.messages.update(|msgs| msgs.push(message));
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn set_error(&self, error: Option<String>) {
        self.error.set(error);
    }

    fn snapshot(&self) -> ThreadState {
        ThreadState {
            messages: self.messages.get_untracked(),
            busy: self.busy.get_untracked(),
            error: self.error.get_untracked(),
        }
    }

    fn is_busy(&self) -> bool {
        self.busy.get_untracked()
    }
}

/// Visibility hooks for the page layout.
#[derive(Clone, Copy)]
pub struct LayoutSurface {
    pub chat_open: RwSignal<bool>,
    pub active_tab: RwSignal<Tab>,
}

impl ChatSurface for LayoutSurface {
    fn ensure_chat_visible(&self) {
        self.chat_open.set(true);
    }

    fn ensure_chat_tab_active(&self) {
        self.active_tab.set(Tab::Chat);
    }
}

pub type Bus = ChatBus<BrowserSessionStore, SignalThreadStore, GlooTransport, LayoutSurface>;

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub messages: RwSignal<Vec<Message>>,
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub chat_open: RwSignal<bool>,
    pub active_tab: RwSignal<Tab>,
    pub resume: RwSignal<Option<Resume>>,
    bus: StoredValue<Bus>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let thread = SignalThreadStore {
            messages: RwSignal::new(Vec::new()),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        let surface = LayoutSurface {
            chat_open: RwSignal::new(false),
            active_tab: RwSignal::new(Tab::Profile),
        };
        let dispatcher = Dispatcher::new(
            BrowserSessionStore,
            thread,
            GlooTransport::new(api::API_BASE),
        );

        let state = Self {
            messages: thread.messages,
            busy: thread.busy,
            error: thread.error,
            chat_open: surface.chat_open,
            active_tab: surface.active_tab,
            resume: RwSignal::new(None),
            bus: StoredValue::new(ChatBus::new(dispatcher, surface)),
        };

        provide_context(state);
        state
    }

    /// Load the résumé from the backend. Called once on mount.
    pub fn load_resume(&self) {
        let state = *self;
        spawn_local(async move {
            match api::fetch_resume().await {
                Ok(resume) => state.resume.set(Some(resume)),
                Err(e) => log::error!("Failed to fetch resume: {e}"),
            }
        });
    }

    /// Typed into the chat input; the panel is already visible.
    pub fn send_message(&self, text: String) {
        let bus = self.bus.get_value();
        spawn_local(async move {
            bus.request_message(&text).await;
        });
    }

    /// From anywhere on the page: opens the chat, then sends.
    pub fn ask(&self, text: String) {
        let bus = self.bus.get_value();
        spawn_local(async move {
            bus.ask(&text).await;
        });
    }

    pub fn activate_tag(&self, token: String) {
        let bus = self.bus.get_value();
        spawn_local(async move {
            bus.activate_tag(&token).await;
        });
    }

    pub fn choose_suggestion(&self, prompt: &'static str) {
        let bus = self.bus.get_value();
        spawn_local(async move {
            bus.choose_suggestion(prompt).await;
        });
    }

    /// Shows the chat without sending anything.
    pub fn open_chat(&self) {
        self.bus.with_value(|bus| {
            bus.surface().ensure_chat_visible();
            bus.surface().ensure_chat_tab_active();
        });
    }

    pub fn dismiss_error(&self) {
        self.bus.with_value(|bus| bus.dispatcher().thread().dismiss_error());
    }

    /// Starter prompts for the current thread state.
    pub fn suggestions(&self) -> &'static [&'static str] {
        // The bus reads untracked, so subscribe here.
        self.messages.track();
        self.busy.track();
        self.bus.with_value(|bus| bus.suggestions())
    }
}
