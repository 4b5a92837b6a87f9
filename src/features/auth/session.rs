//! Session token storage behind a narrow trait so the sign-in flow can be
//! exercised without a browser storage backend. The browser implementation
//! writes `localStorage` with last-write-wins semantics; each successful
//! sign-in overwrites the previous token.

use std::cell::RefCell;
use std::rc::Rc;

/// Key under which the access token lives in the persistent store.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Minimal persistent-store surface the auth flow needs.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory store used by unit tests and non-browser builds.
#[derive(Clone, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// `localStorage`-backed store. Storage access can fail (disabled storage,
/// privacy modes); reads fall back to `None` and writes are dropped rather
/// than surfaced, matching how the rest of the UI treats storage.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(ACCESS_TOKEN_KEY).ok())
            .flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySession, SessionStore};

    #[test]
    fn memory_session_starts_empty() {
        let session = MemorySession::default();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn set_overwrites_with_last_write_wins() {
        let session = MemorySession::default();
        session.set("first");
        session.set("second");
        assert_eq!(session.get(), Some("second".to_string()));
    }

    #[test]
    fn clear_removes_the_token() {
        let session = MemorySession::default();
        session.set("token");
        session.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn clones_share_the_same_backing_cell() {
        let session = MemorySession::default();
        let alias = session.clone();
        session.set("shared");
        assert_eq!(alias.get(), Some("shared".to_string()));
    }
}
