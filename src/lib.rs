//! # theme-toggle
//!
//! Light/dark theme preference for server-rendered pages. Resolves the
//! effective theme before first paint, applies it as a class on the root
//! element, and lets the user flip it with the choice persisted in
//! origin-scoped storage.
//!
//! The styling layer is an external collaborator: it only keys off the root
//! marker class this crate manages. Storage, the root element and the system
//! color-scheme signal are injected through the [`host`] traits so the logic
//! runs unchanged against the browser (`hydrate` feature) or the in-memory
//! fakes in [`memory`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Default storage key, marker class and media query |
//! | [`config`] | [`config::ThemeConfig`] with validation and JSON loading |
//! | [`preference`] | Stored tri-state preference, two-state color mode, resolution rules |
//! | [`error`] | Persistence and configuration errors |
//! | [`host`] | Injection seams for storage, root marker and system signal |
//! | [`memory`] | In-memory implementations of the seams |
//! | [`toggle`] | [`toggle::PreferenceToggle`]: initialize and toggle |
//! | `browser` | web-sys seams and wasm-bindgen exports (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod error;
pub mod host;
pub mod memory;
pub mod preference;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use error::{ConfigError, PersistenceError};
pub use preference::{ColorMode, ThemePreference};
pub use toggle::PreferenceToggle;
