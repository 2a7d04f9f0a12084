use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value storage for the handful of preferences the deck
/// keeps between visits.
///
/// The app talks to storage only through this trait so the root can
/// inject the browser-backed store in `main` and tests can inject an
/// in-memory one. Both operations are infallible at the signature
/// level: an unavailable or full store reads as absent and reports
/// writes as not persisted, and the caller decides how loud to be.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if the key is
    /// missing or the store is unavailable.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. Returns `false` when the value
    /// could not be persisted.
    fn write(&self, key: &str, value: &str) -> bool;
}

/// `window.localStorage`-backed store used in the browser build.
///
/// Storage can be missing entirely (private windows, embedded
/// webviews) or refuse writes (quota), so every browser call collapses
/// to the trait's quiet failure modes.
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }
}

/// In-memory store for tests and native rendering, where no browser
/// storage exists.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_read_write_round_trip() {
        let store = MemoryStore::new();
        assert!(store.write("darkMode", "true"));
        assert_eq!(store.read("darkMode"), Some("true".to_string()));
    }

    #[test]
    fn test_memory_store_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("darkMode"), None);
    }

    #[test]
    fn test_memory_store_overwrites_existing_value() {
        let store = MemoryStore::new();
        store.write("darkMode", "true");
        store.write("darkMode", "false");
        assert_eq!(store.read("darkMode"), Some("false".to_string()));
    }
}
