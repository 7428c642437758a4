// ============================================================================
// SESSION STORE - admin session repository
// ============================================================================
// Pages never touch localStorage directly; they go through this interface so
// tests can substitute the in-memory variant.
// ============================================================================

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::config::ADMIN_SESSION_KEY;
use crate::models::AdminSession;

pub trait SessionStore {
    fn get(&self) -> Option<AdminSession>;
    fn set(&self, session: &AdminSession) -> Result<(), String>;
    fn clear(&self);
}

/// Shared handle passed to pages through Yew context.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self(store)
    }
}

impl Deref for SessionHandle {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionHandle")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

// Context equality: same underlying store means same context value.
impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Production store over `window.localStorage`, single fixed key.
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<AdminSession> {
        let storage = Self::storage()?;
        let json = storage.get_item(ADMIN_SESSION_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    fn set(&self, session: &AdminSession) -> Result<(), String> {
        let storage = Self::storage().ok_or("localStorage is not available")?;
        let json = serde_json::to_string(session)
            .map_err(|e| format!("Failed to serialize session: {e}"))?;
        storage
            .set_item(ADMIN_SESSION_KEY, &json)
            .map_err(|_| "Failed to write session to localStorage".to_string())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ADMIN_SESSION_KEY);
        }
    }
}

/// In-memory fake with the same contract, for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<AdminSession>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<AdminSession> {
        self.session.borrow().clone()
    }

    fn set(&self, session: &AdminSession) -> Result<(), String> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemorySessionStore::default();
        assert!(store.get().is_none());
    }

    #[test]
    fn memory_store_round_trips_payload_verbatim() {
        let store = MemorySessionStore::default();
        let session = AdminSession(json!({ "token": "t-1", "role": "admin" }));

        store.set(&session).unwrap();

        assert_eq!(store.get(), Some(session));
    }

    #[test]
    fn memory_store_clear_removes_session() {
        let store = MemorySessionStore::default();
        store.set(&AdminSession(json!({ "token": "t-1" }))).unwrap();

        store.clear();

        assert!(store.get().is_none());
    }

    #[test]
    fn set_overwrites_previous_session() {
        let store = MemorySessionStore::default();
        store.set(&AdminSession(json!({ "token": "old" }))).unwrap();
        let newer = AdminSession(json!({ "token": "new" }));

        store.set(&newer).unwrap();

        assert_eq!(store.get(), Some(newer));
    }

    #[test]
    fn handle_compares_by_store_identity() {
        let store: Rc<dyn SessionStore> = Rc::new(MemorySessionStore::default());
        let a = SessionHandle::new(store.clone());
        let b = SessionHandle::new(store);
        let c = SessionHandle::new(Rc::new(MemorySessionStore::default()));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
