use web_sys::window;

use crate::config::LEAD_TYPE_STORAGE_KEY;
use crate::recommend::Track;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// `window.localStorage`. Missing storage (private mode, sandboxed iframes)
/// behaves like an empty store that forgets writes.
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("failed to persist {}: {:?}", key, e);
            }
        }
    }
}

pub fn load_lead_type(store: &impl KeyValueStore) -> Track {
    store
        .get_item(LEAD_TYPE_STORAGE_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

pub fn save_lead_type(store: &impl KeyValueStore, track: Track) {
    store.set_item(LEAD_TYPE_STORAGE_KEY, track.as_str());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn defaults_to_agency() {
        let store = MemoryStore::default();
        assert_eq!(load_lead_type(&store), Track::Agency);
    }

    #[test]
    fn remembers_last_selection() {
        let store = MemoryStore::default();
        save_lead_type(&store, Track::Solution);
        assert_eq!(load_lead_type(&store), Track::Solution);
        assert_eq!(store.get_item("lead_type_preference").as_deref(), Some("solution"));

        save_lead_type(&store, Track::Agency);
        assert_eq!(load_lead_type(&store), Track::Agency);
    }

    #[test]
    fn unknown_values_fall_back_to_agency() {
        let store = MemoryStore::default();
        store.set_item(LEAD_TYPE_STORAGE_KEY, "enterprise");
        assert_eq!(load_lead_type(&store), Track::Agency);
    }
}
