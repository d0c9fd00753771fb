use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

/// Storage key used by browser-backed implementations.
pub const SESSION_KEY: &str = "resume_chat_session_id";

/// A single string slot that lives as long as the browsing session.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, id: &str);
}

/// In-memory slot, for tests and hosts without a browser.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(id.into()))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, id: &str) {
        *self.slot.borrow_mut() = Some(id.to_string());
    }
}

/// Owns the conversation identifier. A locally generated id is provisional;
/// whatever the server returns is adopted as authoritative.
#[derive(Clone, Debug)]
pub struct SessionIdentity<S> {
    store: S,
}

impl<S: SessionStore> SessionIdentity<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the stored id, generating and persisting a new one if the slot
    /// is empty.
    pub fn get_or_create_id(&self) -> String {
        if let Some(id) = self.store.load().filter(|id| !id.is_empty()) {
            return id;
        }
        let id = Uuid::new_v4().to_string();
        log::debug!("Starting new chat session {id}");
        self.store.save(&id);
        id
    }

    /// Overwrites the stored id with a server-confirmed one.
    pub fn adopt(&self, id: &str) {
        if self.store.load().as_deref() != Some(id) {
            log::debug!("Adopting server session id {id}");
        }
        self.store.save(id);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_once_and_reuses() {
        let identity = SessionIdentity::new(MemorySessionStore::new());
        let first = identity.get_or_create_id();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(identity.get_or_create_id(), first);
        assert_eq!(identity.store().load().as_deref(), Some(first.as_str()));
    }

    #[test]
    fn adopted_id_wins() {
        let identity = SessionIdentity::new(MemorySessionStore::with_id("local"));
        identity.adopt("abc123");
        assert_eq!(identity.get_or_create_id(), "abc123");
    }

    #[test]
    fn empty_slot_counts_as_absent() {
        let identity = SessionIdentity::new(MemorySessionStore::with_id(""));
        assert!(!identity.get_or_create_id().is_empty());
    }
}
