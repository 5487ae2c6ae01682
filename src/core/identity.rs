//! Backend-issued user identity.
//!
//! The client never mints an identifier. It adopts whatever `user_id` the
//! backend returns and echoes it back on later requests. The id lives in
//! persistent storage so history survives across sessions.

use std::rc::Rc;

use crate::config::USER_ID_KEY;
use crate::core::storage::KeyValueStore;
use crate::utils::console;

/// Reads and writes the single user identifier.
#[derive(Clone)]
pub struct IdentityHolder {
    store: Rc<dyn KeyValueStore>,
}

impl IdentityHolder {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current identifier, if one has been adopted.
    pub fn get_id(&self) -> Option<String> {
        self.store
            .get_item(USER_ID_KEY)
            .ok()
            .flatten()
            .filter(|id| !id.trim().is_empty())
    }

    /// Adopt an identifier returned by the backend. Blank ids are ignored.
    pub fn set_id(&self, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            return;
        }
        if let Err(e) = self.store.set_item(USER_ID_KEY, id) {
            console::warn(&format!("could not persist user id: {}", e));
        }
    }

    /// Forget the identifier.
    pub fn clear(&self) {
        let _ = self.store.remove_item(USER_ID_KEY);
    }
}
