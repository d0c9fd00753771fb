use resume_chat_core::SessionStore;
use resume_chat_core::session::SESSION_KEY;
use web_sys::Storage;

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Session id slot in `window.sessionStorage`, so it lasts exactly as long
/// as the tab's browsing session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<String> {
        session_storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn save(&self, id: &str) {
        let Some(storage) = session_storage() else {
            log::warn!("sessionStorage unavailable; session id kept for this request only");
            return;
        };
        if let Err(e) = storage.set_item(SESSION_KEY, id) {
            log::warn!("Failed to persist session id: {e:?}");
        }
    }
}
