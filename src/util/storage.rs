//! Key/value preference storage.
//!
//! The theme controller only needs "read one string" and "write one string",
//! so the seam is a two-method trait: `localStorage` in the browser and an
//! in-memory map in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub trait PreferenceStore {
    /// Stored value for `key`, or `None` if unset or unreadable.
    fn load(&self, key: &str) -> Option<String>;
    /// Persist `value` under `key`. Failures are logged, not surfaced.
    fn save(&self, key: &str, value: &str);
}

/// Process-local store; contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`. Unavailable storage (private mode, disabled
/// cookies) behaves as an empty store that drops writes.
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; preference {key} not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to save preference {key}: {e:?}");
        }
    }
}
