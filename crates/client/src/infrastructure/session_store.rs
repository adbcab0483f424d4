//! In-memory session storage adapter
//!
//! Stands in for the browser's sessionStorage: values live for the lifetime
//! of the owning store handle and are visible to everything sharing it,
//! nothing else.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::outbound::StorageProvider;

/// Session-lifetime key/value store backed by a mutexed map.
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemorySessionStore {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}
