//! Theme configuration.
//!
//! The defaults match the hosting page and stylesheet; hosts only override
//! them when embedding the toggle in a page with a different key or marker.

use serde::Deserialize;

use crate::consts::{DARK_CLASS, DARK_SCHEME_QUERY, STORAGE_KEY};
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Names the toggle uses to talk to its host.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Key in the preference store.
    pub storage_key: String,
    /// Class toggled on the root element.
    pub marker_class: String,
    /// Media query consulted when no preference is stored.
    pub dark_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            marker_class: DARK_CLASS.to_owned(),
            dark_scheme_query: DARK_SCHEME_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object, filling missing fields with defaults, and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation error for unusable values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name is usable by the host.
    ///
    /// The marker must be a single class token: a class list rejects empty
    /// tokens and tokens containing whitespace.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.marker_class.is_empty() || self.marker_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidMarkerClass(self.marker_class.clone()));
        }
        if self.dark_scheme_query.trim().is_empty() {
            return Err(ConfigError::EmptyQuery);
        }
        Ok(())
    }
}
