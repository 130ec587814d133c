use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected the operation: {0}")]
    Rejected(String),
}

/// Tab-scoped key/value store. Reads of a broken store come back empty and
/// writes to it are dropped, so callers never see a failure.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.sessionStorage`, failing soft when the browser refuses access
/// (privacy modes, sandboxed iframes).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .session_storage()
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                warn!("Reading {} failed: {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let result = Self::storage().and_then(|storage| {
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
        });
        if let Err(e) = result {
            warn!("Writing {} failed: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let result = Self::storage().and_then(|storage| {
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
        });
        if let Err(e) = result {
            warn!("Removing {} failed: {}", key, e);
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemorySession {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Storage the browser refused outright: nothing reads back, nothing sticks.
#[cfg(test)]
pub struct BrokenSession;

#[cfg(test)]
impl SessionStore for BrokenSession {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Shared handle handed down through context so no component touches
/// storage directly.
#[derive(Clone)]
pub struct Session(Rc<dyn SessionStore>);

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self(store)
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserSession))
    }

    pub fn store(&self) -> &dyn SessionStore {
        &*self.0
    }

    /// The EXIT action: forget every decision made this session.
    pub fn reset(&self) {
        for key in [config::VISITOR_KEY, config::MODE_KEY, config::INTRO_SEEN_KEY] {
            self.0.remove(key);
        }
        info!("Session reset");
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const u8,
            Rc::as_ptr(&other.0) as *const u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_every_owned_key() {
        let memory = Rc::new(MemorySession::default());
        let session = Session::new(memory.clone());
        memory.set(config::VISITOR_KEY, "recruiter");
        memory.set(config::MODE_KEY, "red");
        memory.set(config::INTRO_SEEN_KEY, "true");
        memory.set("unrelated", "kept");

        session.reset();

        assert_eq!(memory.get(config::VISITOR_KEY), None);
        assert_eq!(memory.get(config::MODE_KEY), None);
        assert_eq!(memory.get(config::INTRO_SEEN_KEY), None);
        assert_eq!(memory.get("unrelated").as_deref(), Some("kept"));
    }

    #[test]
    fn reset_over_refused_storage_is_quiet() {
        let session = Session::new(Rc::new(BrokenSession));
        session.store().set(config::VISITOR_KEY, "recruiter");
        session.reset();
        assert_eq!(session.store().get(config::VISITOR_KEY), None);
    }

    #[test]
    fn handles_compare_by_identity() {
        let memory: Rc<dyn SessionStore> = Rc::new(MemorySession::default());
        let a = Session::new(memory.clone());
        let b = Session::new(memory);
        let c = Session::new(Rc::new(MemorySession::default()));
        assert!(a == b);
        assert!(a != c);
    }
}
