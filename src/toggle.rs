//! The preference toggle.
//!
//! DESIGN
//! ======
//! The root marker is the single source of truth for the visual state. The
//! store only mirrors it across page loads, so every storage failure is
//! logged and swallowed: the current view always renders and flips
//! correctly, only cross-session persistence is lost.
//!
//! [`PreferenceToggle::initialize`] must run once, synchronously, before
//! first paint; otherwise the page flashes the wrong theme.

use crate::config::ThemeConfig;
use crate::error::ConfigError;
use crate::host::{PreferenceStore, RootMarker, SchemeSignal};
use crate::preference::{ColorMode, ThemePreference};

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Resolves, applies and persists the light/dark preference.
pub struct PreferenceToggle<S, R, Q> {
    config: ThemeConfig,
    store: S,
    root: R,
    scheme: Q,
}

impl<S, R, Q> PreferenceToggle<S, R, Q>
where
    S: PreferenceStore,
    R: RootMarker,
    Q: SchemeSignal,
{
    /// Build a toggle with the default page contract.
    pub fn new(store: S, root: R, scheme: Q) -> Self {
        Self { config: ThemeConfig::default(), store, root, scheme }
    }

    /// Build a toggle with custom names.
    ///
    /// # Errors
    ///
    /// Returns the validation error when `config` is unusable.
    pub fn with_config(config: ThemeConfig, store: S, root: R, scheme: Q) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, store, root, scheme })
    }

    /// Resolve the startup theme and apply it to the root marker.
    ///
    /// A stored `"true"` selects dark. Nothing stored (or an unreadable store)
    /// defers to the system signal. Any other stored value selects light.
    pub fn initialize(&mut self) -> ColorMode {
        let preference = match self.store.read(&self.config.storage_key) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(err) => {
                log::warn!("theme preference unreadable, using system scheme: {err}");
                ThemePreference::Unset
            }
        };

        let mode = preference.resolve(|| self.scheme.matches(&self.config.dark_scheme_query));
        self.root.set_marker(&self.config.marker_class, mode.is_dark());
        log::debug!("theme initialized: {mode:?} (stored {preference:?})");
        mode
    }

    /// Flip the theme and persist the new state.
    ///
    /// The marker flips even when the write fails.
    pub fn toggle(&mut self) -> ColorMode {
        let mode = ColorMode::from_dark(self.root.toggle_marker(&self.config.marker_class));
        if let Err(err) = self.store.write(&self.config.storage_key, mode.stored_value()) {
            log::warn!("theme preference not persisted: {err}");
        }
        log::debug!("theme toggled: {mode:?}");
        mode
    }

    /// Current visual state, read from the root marker.
    pub fn mode(&self) -> ColorMode {
        ColorMode::from_dark(self.root.has_marker(&self.config.marker_class))
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn scheme(&self) -> &Q {
        &self.scheme
    }
}
