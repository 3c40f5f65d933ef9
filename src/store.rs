/// The bookmark list and every change made to it

use crate::bookmark::BookmarkRecord;
use crate::config::AppConfig;
use crate::error::{IndexError, StoreError};
use crate::storage::{decode_bookmarks, encode_bookmarks, KeyValueStore};
use crate::validation::validate;

/// Read the stored list under `key`; an absent entry is an empty list
pub fn initialize<S: KeyValueStore>(
    backend: &S,
    key: &str,
) -> Result<Vec<BookmarkRecord>, StoreError> {
    match backend.get(key)? {
        Some(raw) => decode_bookmarks(&raw),
        None => Ok(Vec::new()),
    }
}

/// Owns the ordered bookmarks and keeps the durable copy in step with them
#[derive(Debug, Clone)]
pub struct BookmarkStore<S: KeyValueStore> {
    backend: S,
    key: String,
    records: Vec<BookmarkRecord>,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Load the stored list and take ownership of the backend
    ///
    /// A malformed entry fails with [`StoreError::Malformed`] and is left in
    /// place untouched.
    pub fn open(backend: S, config: &AppConfig) -> Result<Self, StoreError> {
        let records = initialize(&backend, &config.storage_key).map_err(|e| {
            log::error!("Failed to load bookmarks from {:?}: {}", config.storage_key, e);
            e
        })?;

        log::info!(
            "Loaded {} bookmark(s) from {:?}",
            records.len(),
            config.storage_key
        );

        Ok(BookmarkStore {
            backend,
            key: config.storage_key.clone(),
            records,
        })
    }

    /// Validate and append a new bookmark, then persist the whole list
    pub fn add(&mut self, name: &str, url: &str) -> Result<BookmarkRecord, StoreError> {
        if let Err(e) = validate(name, url) {
            log::warn!("Rejected bookmark {:?} -> {:?}: {}", name, url, e);
            return Err(e.into());
        }

        let record = BookmarkRecord::new(name, url);
        self.records.push(record.clone());

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        log::info!("Added bookmark {:?} ({} total)", record.name, self.records.len());
        Ok(record)
    }

    /// Remove the bookmark at `index`, shifting later ones down, then persist
    pub fn remove_at(&mut self, index: usize) -> Result<BookmarkRecord, StoreError> {
        if index >= self.records.len() {
            let err = IndexError {
                index,
                len: self.records.len(),
            };
            log::warn!("Ignoring delete: {}", err);
            return Err(err.into());
        }

        let removed = self.records.remove(index);

        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        log::info!("Removed bookmark {:?} at {}", removed.name, index);
        Ok(removed)
    }

    /// Current bookmarks in display order
    pub fn list(&self) -> &[BookmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = encode_bookmarks(&self.records)?;
        self.backend.set(&self.key, &json).map_err(|e| {
            log::error!("Failed to persist bookmarks to {:?}: {}", self.key, e);
            e
        })?;

        log::debug!("Persisted {} bookmark(s)", self.records.len());
        Ok(())
    }
}
