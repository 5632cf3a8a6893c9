//! Observable in-memory holder for one preference value.
//!
//! A [`PreferenceCell`] lazily loads its value from a [`PreferenceStore`] on
//! first access, then treats the in-memory value as authoritative. Every
//! accepted change is applied in memory, delivered to observers, and only
//! then written through to the store. Store failures never reach the caller.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::store::{PreferenceKey, PreferenceStore};

/// Raised when a raw value is outside a preference's permitted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for {key}: {value:?}")]
pub struct ValidationError {
    pub key: PreferenceKey,
    pub value: String,
}

/// A value that can live in a [`PreferenceCell`].
pub trait Preference: Copy + PartialEq + Debug + Default + 'static {
    /// Key the value is persisted under.
    const KEY: PreferenceKey;

    /// Stored string form.
    fn to_stored(self) -> &'static str;

    /// Parse a stored string; `None` if it isn't a permitted value.
    fn from_stored(raw: &str) -> Option<Self>;
}

/// Handle returned by [`PreferenceCell::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(T)>;

/// Single-threaded observable preference with write-through persistence.
pub struct PreferenceCell<T: Preference> {
    store: Rc<dyn PreferenceStore>,
    /// `None` until the first read from the store.
    value: Cell<Option<T>>,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

impl<T: Preference> PreferenceCell<T> {
    /// Create an uninitialized cell backed by `store`.
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            value: Cell::new(None),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Whether the value has been loaded from the store yet.
    pub fn is_ready(&self) -> bool {
        self.value.get().is_some()
    }

    /// Current value, loading it from the store on first access.
    pub fn get(&self) -> T {
        if let Some(value) = self.value.get() {
            return value;
        }
        let value = self.load();
        self.value.set(Some(value));
        value
    }

    /// Replace the value.
    ///
    /// Observers run before this returns. The store write happens last and
    /// its failure only logs.
    pub fn set(&mut self, value: T) {
        // Load first so the cell is Ready before it accepts a mutation.
        let previous = self.get();
        self.value.set(Some(value));
        info!(key = %T::KEY, ?previous, ?value, "Preference changed");

        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }

        if let Err(e) = self.store.set(T::KEY, value.to_stored()) {
            warn!(key = %T::KEY, error = %e, "Failed to persist preference");
        }
    }

    /// Replace the value from its stored string form.
    ///
    /// Unknown input is rejected and the cell is left untouched.
    pub fn set_value(&mut self, raw: &str) -> Result<T, ValidationError> {
        let value = T::from_stored(raw).ok_or_else(|| ValidationError {
            key: T::KEY,
            value: raw.to_string(),
        })?;
        self.set(value);
        Ok(value)
    }

    /// Register an observer called with every accepted new value.
    ///
    /// Observers are called in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` wasn't registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn load(&self) -> T {
        match self.store.get(T::KEY) {
            Ok(Some(raw)) => match T::from_stored(&raw) {
                Some(value) => {
                    debug!(key = %T::KEY, ?value, "Loaded preference");
                    value
                }
                None => {
                    warn!(key = %T::KEY, stored = %raw, "Unrecognized stored preference, using default");
                    T::default()
                }
            },
            Ok(None) => {
                debug!(key = %T::KEY, "No stored preference, using default");
                T::default()
            }
            Err(e) => {
                warn!(key = %T::KEY, error = %e, "Failed to read preference, using default");
                T::default()
            }
        }
    }
}

impl<T: Preference> std::fmt::Debug for PreferenceCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceCell")
            .field("key", &T::KEY)
            .field("value", &self.value.get())
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
