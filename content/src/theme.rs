//! Dark mode preference, loaded once and persisted on every change.
//!
//! The flag is stored under [`THEME_STORAGE_KEY`] as a JSON literal
//! (`true` / `false`). Storage is abstracted behind [`PreferenceStorage`]
//! so the store can run against browser `localStorage` or an in-memory map.

use std::collections::HashMap;

/// Key the dark mode flag is persisted under.
pub const THEME_STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage rejected write to '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Durable string key/value storage.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used in tests and when the browser offers none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The dark mode flag and the storage it is persisted to.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    dark: bool,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Load the persisted flag. Missing or unparsable values mean light.
    pub fn init(storage: S) -> Self {
        let dark = match storage.read(THEME_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => dark,
                Err(e) => {
                    tracing::debug!(
                        raw = %raw,
                        error = %e,
                        "ignoring malformed theme preference"
                    );
                    false
                }
            },
            None => false,
        };
        tracing::debug!(dark, "theme preference loaded");
        Self { storage, dark }
    }

    pub fn get(&self) -> bool {
        self.dark
    }

    /// Flip the flag and persist it. Returns the new value.
    ///
    /// A failed write is logged; the in-memory flag still changes.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        let encoded = encode(self.dark);
        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, &encoded) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        self.dark
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn encode(dark: bool) -> String {
    // serializing a bool cannot fail
    serde_json::to_string(&dark).unwrap_or_else(|_| dark.to_string())
}
