// crates/countrydex-core/src/store/memory.rs
use crate::error::{CountryDexError, Result};
use crate::traits::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process key-value store. Nothing outlives the value itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `(key, value)` pairs.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CountryDexError::StorageUnavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CountryDexError::StorageUnavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
