//! In-memory host seams.
//!
//! Used by this crate's tests and by hosts that want to exercise theme
//! behavior without a browser. Each fake can be told to fail or records how
//! it was used.

use std::cell::Cell;
use std::collections::{BTreeSet, HashMap};

use crate::error::PersistenceError;
use crate::host::{PreferenceStore, RootMarker, SchemeSignal};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Preference store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make every read fail, as when storage is disabled.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail, as when storage is full or read-only.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw value under `key`, bypassing failure injection.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Unavailable("storage disabled".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::WriteFailed("quota exceeded".into()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Root element reduced to its class list.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    classes: BTreeSet<String>,
    toggles: usize,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root that already carries `class`, as if server-rendered with it.
    #[must_use]
    pub fn with_class(class: &str) -> Self {
        let mut root = Self::new();
        root.classes.insert(class.to_owned());
        root
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of [`RootMarker::toggle_marker`] calls.
    #[must_use]
    pub fn toggles(&self) -> usize {
        self.toggles
    }
}

impl RootMarker for MemoryRoot {
    fn has_marker(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn set_marker(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
    }

    fn toggle_marker(&mut self, class: &str) -> bool {
        self.toggles += 1;
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_owned());
            true
        }
    }
}

/// System signal with a fixed answer that counts how often it is asked.
#[derive(Debug, Default)]
pub struct FixedScheme {
    prefers_dark: bool,
    queries: Cell<usize>,
}

impl FixedScheme {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark, queries: Cell::new(0) }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn light() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl SchemeSignal for FixedScheme {
    fn matches(&self, _query: &str) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.prefers_dark
    }
}
