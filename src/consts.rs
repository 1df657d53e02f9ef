//! Defaults shared with the hosting page and its stylesheet.

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "qr-attendance-dark";

/// Class on the root element that switches the stylesheet to dark mode.
pub const DARK_CLASS: &str = "dark";

/// Media query reporting the system's dark color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Stored value meaning "dark". Only this exact string selects dark mode.
pub const STORED_DARK: &str = "true";

/// Stored value written when the user switches to light mode.
pub const STORED_LIGHT: &str = "false";
