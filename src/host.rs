//! Seams between the toggle and its host environment.
//!
//! In a browser these are `localStorage`, `document.documentElement` and
//! `matchMedia`. The toggle only ever sees these traits.

use crate::error::PersistenceError;

/// Origin-scoped key-value store that survives reloads.
pub trait PreferenceStore {
    /// Read the raw value under `key`. `Ok(None)` means nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] when the store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] when the store cannot be reached or
    /// refuses the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Boolean class marker on the document's root element.
///
/// Marker operations cannot fail from the caller's point of view: the
/// visual state for the current view must always follow the toggle.
pub trait RootMarker {
    fn has_marker(&self, class: &str) -> bool;

    /// Add the marker when `on`, remove it otherwise.
    fn set_marker(&mut self, class: &str, on: bool);

    /// Flip the marker and return whether it is now present.
    fn toggle_marker(&mut self, class: &str) -> bool;
}

/// Read-only system color-scheme signal.
pub trait SchemeSignal {
    /// Whether the environment matches `query` (a dark color-scheme query).
    fn matches(&self, query: &str) -> bool;
}
