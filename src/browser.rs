//! Browser host and JavaScript exports.
//!
//! Backs the [`crate::host`] seams with `localStorage`, the `<html>` element's
//! class list and `matchMedia`, and exports the page-facing functions:
//!
//! - `initDarkMode()` / `initDarkModeWith(configJson)`: call once from a
//!   blocking script in `<head>` so the marker is in place before first paint.
//! - `toggleDarkMode()`: wire to the theme switch control.

use std::cell::RefCell;
use std::sync::Once;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Storage};

use crate::config::ThemeConfig;
use crate::error::PersistenceError;
use crate::host::{PreferenceStore, RootMarker, SchemeSignal};
use crate::toggle::PreferenceToggle;

/// Toggle wired to the live page.
pub type BrowserToggle = PreferenceToggle<LocalStorage, DocumentRoot, MediaQuery>;

thread_local! {
    static ACTIVE: RefCell<Option<BrowserToggle>> = const { RefCell::new(None) };
}

/// `window.localStorage`, looked up on every access since the page may
/// revoke it at any time.
#[derive(Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, PersistenceError> {
        let window = web_sys::window().ok_or_else(|| PersistenceError::Unavailable("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PersistenceError::Unavailable("localStorage missing".into())),
            Err(err) => Err(PersistenceError::Unavailable(format!("{err:?}"))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Self::storage()?.get_item(key).map_err(|err| PersistenceError::ReadFailed(format!("{err:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| PersistenceError::WriteFailed(format!("{err:?}")))
    }
}

/// `document.documentElement`.
#[derive(Debug)]
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// The current document's root element, if there is a document.
    #[must_use]
    pub fn current() -> Option<Self> {
        let element = web_sys::window()?.document()?.document_element()?;
        Some(Self { element })
    }
}

impl RootMarker for DocumentRoot {
    fn has_marker(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn set_marker(&mut self, class: &str, on: bool) {
        let classes = self.element.class_list();
        let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
        if let Err(err) = result {
            log::warn!("failed to set theme marker {class:?}: {err:?}");
        }
    }

    fn toggle_marker(&mut self, class: &str) -> bool {
        match self.element.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("failed to toggle theme marker {class:?}: {err:?}");
                self.has_marker(class)
            }
        }
    }
}

/// `window.matchMedia`. Reports no match when the API is missing.
#[derive(Debug, Default)]
pub struct MediaQuery;

impl SchemeSignal for MediaQuery {
    fn matches(&self, query: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        matches!(window.match_media(query), Ok(Some(list)) if list.matches())
    }
}

fn install_logging() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            log::debug!("console logger already installed: {err}");
        }
    });
}

fn attach(config: ThemeConfig) -> Option<BrowserToggle> {
    let Some(root) = DocumentRoot::current() else {
        log::warn!("no document root, theme toggle disabled");
        return None;
    };
    match PreferenceToggle::with_config(config, LocalStorage, root, MediaQuery) {
        Ok(toggle) => Some(toggle),
        Err(err) => {
            log::warn!("theme toggle disabled: {err}");
            None
        }
    }
}

fn start(config: ThemeConfig) {
    install_logging();
    let toggle = attach(config).map(|mut toggle| {
        toggle.initialize();
        toggle
    });
    ACTIVE.with(|active| *active.borrow_mut() = toggle);
}

/// Apply the stored or system theme with the default page contract.
#[wasm_bindgen(js_name = initDarkMode)]
pub fn init_dark_mode() {
    start(ThemeConfig::default());
}

/// Apply the stored or system theme with names taken from a JSON object
/// (`storageKey`, `markerClass`, `darkSchemeQuery`). Falls back to the
/// defaults when the JSON is unusable.
#[wasm_bindgen(js_name = initDarkModeWith)]
pub fn init_dark_mode_with(config_json: &str) {
    install_logging();
    let config = ThemeConfig::from_json(config_json).unwrap_or_else(|err| {
        log::warn!("invalid theme config, using defaults: {err}");
        ThemeConfig::default()
    });
    start(config);
}

/// Flip the theme and persist the choice.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() {
    ACTIVE.with(|active| {
        let mut active = active.borrow_mut();
        if active.is_none() {
            *active = attach(ThemeConfig::default());
        }
        if let Some(toggle) = active.as_mut() {
            toggle.toggle();
        }
    });
}
