//! Session context shared through Leptos. The provider wraps the injected
//! [`SessionStore`] with a reactive token signal so layouts can derive auth
//! state, while writes keep the persistent store and the signal in step.
//! Only the opaque token is held in memory; nothing else about the user is.

use crate::features::auth::session::{MemorySession, SessionStore};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
/// Reactive handle over the injected session store.
pub struct SessionContext {
    store: StoredValue<Rc<dyn SessionStore>, LocalStorage>,
    token: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    /// Builds a context around the provided store, seeding the signal from
    /// whatever token a previous visit left behind.
    fn new(store: Rc<dyn SessionStore>) -> Self {
        let token = RwSignal::new(store.get());
        let is_authenticated = Signal::derive(move || token.get().is_some());
        Self {
            store: StoredValue::new_local(store),
            token,
            is_authenticated,
        }
    }
}

impl SessionStore for SessionContext {
    fn get(&self) -> Option<String> {
        self.store.with_value(|store| store.get())
    }

    fn set(&self, token: &str) {
        self.store.with_value(|store| store.set(token));
        self.token.set(Some(token.to_string()));
    }

    fn clear(&self) {
        self.store.with_value(|store| store.clear());
        self.token.set(None);
    }
}

/// Provides the session context backed by browser storage (in-memory off the
/// browser, which also covers consumers mounted without a browser backend).
pub fn provide_session() {
    #[cfg(target_arch = "wasm32")]
    let store: Rc<dyn SessionStore> = Rc::new(crate::features::auth::session::BrowserSession);
    #[cfg(not(target_arch = "wasm32"))]
    let store: Rc<dyn SessionStore> = Rc::new(MemorySession::default());

    provide_context(SessionContext::new(store));
}

/// Returns the current session context or a detached in-memory fallback.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(Rc::new(MemorySession::default())))
}
