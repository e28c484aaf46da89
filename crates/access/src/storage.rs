use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use shared_types::StorageError;

/// A string key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);
}

/// In-process store. Clones share the same map, the way every handle to
/// `window.localStorage` sees the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let mut a = MemoryStorage::new();
        let b = a.clone();
        a.set("isLoggedIn", "true").unwrap();
        assert_eq!(b.get("isLoggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut store = MemoryStorage::new();
        store.remove("userInfo");
        assert!(store.is_empty());
    }
}
