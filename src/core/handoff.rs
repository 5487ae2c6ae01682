//! One-shot handoff from the home page to the results page.
//!
//! Home writes the fresh recommendation result together with the goal text
//! that produced it; Results takes it on arrival, which also clears it.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::HANDOFF_KEY;
use crate::core::storage::{BrowserStorage, KeyValueStore};
use crate::models::RecommendationResult;
use crate::utils::console;

/// Payload carried between pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    /// Goal text exactly as the user typed it.
    pub goal: String,
    pub result: RecommendationResult,
}

/// Single-slot transfer store.
#[derive(Clone)]
pub struct TransferSlot {
    store: Rc<dyn KeyValueStore>,
}

impl TransferSlot {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Slot in localStorage, so it survives the page switch and a reload
    /// until the results page takes it.
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage::local()))
    }

    /// Replace whatever is in the slot. Returns `false` if it could not be written.
    pub fn put(&self, handoff: &Handoff) -> bool {
        let written = serde_json::to_string(handoff)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.store
                    .set_item(HANDOFF_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        match written {
            Ok(()) => true,
            Err(e) => {
                console::warn(&format!("handoff not saved: {}", e));
                false
            }
        }
    }

    /// Read and clear the slot. A second take returns `None`.
    pub fn take(&self) -> Option<Handoff> {
        let raw = self.store.get_item(HANDOFF_KEY).ok().flatten()?;
        let _ = self.store.remove_item(HANDOFF_KEY);
        serde_json::from_str(&raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use crate::models::Recommendation;

    fn handoff() -> Handoff {
        Handoff {
            goal: "host dinner parties".to_string(),
            result: RecommendationResult {
                analysis_text: "hosting".to_string(),
                items: vec![Recommendation {
                    name: "tablecloth".to_string(),
                    reason: "sets the mood".to_string(),
                    category: "home".to_string(),
                }],
                user_id: None,
                mode: Some("ai".to_string()),
            },
        }
    }

    #[test]
    fn test_take_once() {
        let slot = TransferSlot::new(Rc::new(MemoryStorage::new()));
        assert!(slot.put(&handoff()));

        assert_eq!(slot.take(), Some(handoff()));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_put_replaces_previous() {
        let slot = TransferSlot::new(Rc::new(MemoryStorage::new()));
        slot.put(&handoff());

        let mut newer = handoff();
        newer.goal = "run a marathon".to_string();
        slot.put(&newer);

        assert_eq!(slot.take().map(|h| h.goal).as_deref(), Some("run a marathon"));
    }

    #[test]
    fn test_garbage_is_cleared() {
        let store = MemoryStorage::new();
        store.set_item(HANDOFF_KEY, "not json").unwrap();
        let slot = TransferSlot::new(Rc::new(store.clone()));

        assert_eq!(slot.take(), None);
        assert!(store.is_empty());
    }
}
