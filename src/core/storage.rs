//! Key-value storage capability.
//!
//! The cache, identity holder and transfer slot never touch browser globals
//! directly. They are handed a [`KeyValueStore`], which is either a browser
//! storage area or an in-memory map.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::error::StorageError;
use crate::utils::dom;

/// String key-value store with the semantics of the Web Storage API.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key is not present.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// All keys currently stored.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

// =============================================================================
// Browser Storage
// =============================================================================

/// Which Web Storage area to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// `window.sessionStorage`: per tab, cleared when the session ends.
    Session,
    /// `window.localStorage`: survives across sessions.
    Local,
}

/// [`KeyValueStore`] backed by a browser storage area.
///
/// The `Storage` handle is looked up on every call, so a store created
/// before storage becomes unavailable degrades to errors instead of panics.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let storage = match self.area {
            StorageArea::Session => dom::session_storage(),
            StorageArea::Local => dom::local_storage(),
        };
        storage.ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::ReadFailed)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let storage = self.storage()?;
        let len = storage.length().map_err(|_| StorageError::ReadFailed)?;

        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Ok(Some(key)) = storage.key(i) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// [`KeyValueStore`] kept in memory.
///
/// Clones share the same map, so a test can hand one clone to the client
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn session_storage_round_trip() {
        let store = BrowserStorage::session();
        store.set_item("vibe-test", "1").unwrap();
        assert_eq!(store.get_item("vibe-test").unwrap(), Some("1".to_string()));
        assert!(store.keys().unwrap().contains(&"vibe-test".to_string()));

        store.remove_item("vibe-test").unwrap();
        assert_eq!(store.get_item("vibe-test").unwrap(), None);
    }
}
