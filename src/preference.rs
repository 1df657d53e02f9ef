//! Stored preference, visual color mode, and the rules linking them.

use crate::consts::{STORED_DARK, STORED_LIGHT};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// What the preference store says about the user's choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// The stored value is exactly `"true"`.
    Dark,
    /// Some other value is stored, including `"false"` and garbage.
    Light,
    /// Nothing (or an empty string) is stored.
    #[default]
    Unset,
}

impl ThemePreference {
    /// Decode a raw stored value.
    ///
    /// An empty string counts as unset. Any present value other than `"true"`
    /// is an explicit light choice and suppresses the system signal.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Unset,
            Some(STORED_DARK) => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Resolve the mode to render at startup.
    ///
    /// `system_prefers_dark` is only called for [`ThemePreference::Unset`].
    pub fn resolve(self, system_prefers_dark: impl FnOnce() -> bool) -> ColorMode {
        match self {
            Self::Dark => ColorMode::Dark,
            Self::Light => ColorMode::Light,
            Self::Unset => ColorMode::from_dark(system_prefers_dark()),
        }
    }
}

/// The visual state of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// String written to the preference store for this mode.
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => STORED_DARK,
            Self::Light => STORED_LIGHT,
        }
    }
}
