use std::{cell::RefCell, collections::HashMap, rc::Rc};

use web_sys::{Storage, Window};

use crate::api::ApiError;

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::storage("No window object"))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .map_err(|_| ApiError::storage("No localStorage"))?
        .ok_or_else(|| ApiError::storage("No localStorage"))
}

/// Durable string slots the session is persisted into.
pub trait SlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str) -> Result<(), ApiError>;
}

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SlotStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| ApiError::storage(format!("Failed to read {}", key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| ApiError::storage(format!("Failed to store {}", key)))
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| ApiError::storage(format!("Failed to remove {}", key)))
    }
}

/// In-memory slots for server rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl SlotStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// Local storage in the browser, memory everywhere else.
pub fn default_storage() -> Rc<dyn SlotStorage> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(BrowserStorage)
    } else {
        Rc::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_slots() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("token").unwrap(), None);
        storage.set("token", "T1").unwrap();
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("T1"));
        storage.remove("token").unwrap();
        assert!(!storage.contains("token"));
    }

    #[test]
    fn memory_storage_clones_share_slots() {
        let storage = MemoryStorage::new();
        let alias = storage.clone();
        alias.set("user", "{}").unwrap();
        assert!(storage.contains("user"));
    }
}
