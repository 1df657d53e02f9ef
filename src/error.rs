//! Error types for the storage seam and configuration loading.

/// Failure to reach or use the preference store.
///
/// Never surfaced past [`crate::PreferenceToggle`]: reads fall back to the
/// system signal and writes are dropped after logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// The store does not exist or the environment disallows it.
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
    /// The store exists but the read was rejected.
    #[error("failed to read preference: {0}")]
    ReadFailed(String),
    /// The store exists but the write was rejected (quota, read-only, ...).
    #[error("failed to write preference: {0}")]
    WriteFailed(String),
}

/// Invalid [`crate::ThemeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("marker class must be a single non-empty token, got {0:?}")]
    InvalidMarkerClass(String),
    #[error("dark scheme query must not be empty")]
    EmptyQuery,
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] serde_json::Error),
}
