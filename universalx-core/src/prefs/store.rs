//! Durable key/value backing for preferences.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Errors raised by a preference store.
///
/// Never surfaced past [`PreferenceCell`](super::PreferenceCell): reads
/// degrade to "absent" and writes are dropped with a warning.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The closed set of persisted preference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    Language,
}

impl PreferenceKey {
    /// Name the value is stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Language => "language",
        }
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous durable storage for preference strings.
///
/// A successful `set` must be visible to the next `get` in the same process.
pub trait PreferenceStore {
    /// Read the stored value, or `None` if it was never set.
    fn get(&self, key: PreferenceKey) -> Result<Option<String>, StoreError>;

    /// Store a value, overwriting any previous one.
    fn set(&self, key: PreferenceKey, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: PreferenceKey) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: PreferenceKey, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Volatile store for tests and for hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<PreferenceKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: PreferenceKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(&key).cloned())
    }

    fn set(&self, key: PreferenceKey, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key, value.to_string());
        Ok(())
    }
}
