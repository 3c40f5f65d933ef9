/// Durable key-value storage and the bookmark list's stored form

use crate::bookmark::BookmarkRecord;
use crate::error::{StorageError, StoreError};
use std::collections::HashMap;
use wasm_bindgen::JsValue;

/// String-keyed persistence the bookmark store writes through
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing was ever stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process map backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: HashMap::new(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The page's `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;

        Ok(LocalStore { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error(&e)))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Serialize the list to its stored JSON array form
pub fn encode_bookmarks(records: &[BookmarkRecord]) -> Result<String, StorageError> {
    serde_json::to_string(records).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Parse the stored JSON array form
pub fn decode_bookmarks(raw: &str) -> Result<Vec<BookmarkRecord>, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Malformed(e.to_string()))
}
