use super::*;
use crate::consts::{DARK_CLASS, STORAGE_KEY};
use crate::memory::{FixedScheme, MemoryRoot, MemoryStore};

type MemoryToggle = PreferenceToggle<MemoryStore, MemoryRoot, FixedScheme>;

fn toggle_with(store: MemoryStore, scheme: FixedScheme) -> MemoryToggle {
    PreferenceToggle::new(store, MemoryRoot::new(), scheme)
}

fn stored(toggle: &MemoryToggle) -> Option<&str> {
    toggle.store().get(STORAGE_KEY)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn empty_store_dark_system_sets_dark() {
    let mut toggle = toggle_with(MemoryStore::new(), FixedScheme::dark());
    assert_eq!(toggle.initialize(), ColorMode::Dark);
    assert!(toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn empty_store_light_system_stays_light() {
    let mut toggle = toggle_with(MemoryStore::new(), FixedScheme::light());
    assert_eq!(toggle.initialize(), ColorMode::Light);
    assert!(!toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn stored_true_wins_over_light_system() {
    let mut toggle = toggle_with(MemoryStore::with_entry(STORAGE_KEY, "true"), FixedScheme::light());
    assert_eq!(toggle.initialize(), ColorMode::Dark);
    assert!(toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn stored_false_is_light_even_with_dark_system() {
    let mut toggle = toggle_with(MemoryStore::with_entry(STORAGE_KEY, "false"), FixedScheme::dark());
    assert_eq!(toggle.initialize(), ColorMode::Light);
    assert!(!toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn stored_garbage_is_light_even_with_dark_system() {
    let mut toggle = toggle_with(MemoryStore::with_entry(STORAGE_KEY, "yes please"), FixedScheme::dark());
    assert_eq!(toggle.initialize(), ColorMode::Light);
    assert_eq!(toggle.scheme().queries(), 0);
}

#[test]
fn stored_empty_string_defers_to_system() {
    let mut toggle = toggle_with(MemoryStore::with_entry(STORAGE_KEY, ""), FixedScheme::dark());
    assert_eq!(toggle.initialize(), ColorMode::Dark);
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut toggle = toggle_with(MemoryStore::with_entry("other-app-dark", "true"), FixedScheme::light());
    assert_eq!(toggle.initialize(), ColorMode::Light);
}

#[test]
fn unreadable_store_falls_back_to_system() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "false").failing_reads();
    let mut toggle = toggle_with(store, FixedScheme::dark());
    assert_eq!(toggle.initialize(), ColorMode::Dark);
    assert!(toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn system_queried_at_most_once() {
    let mut toggle = toggle_with(MemoryStore::new(), FixedScheme::dark());
    toggle.initialize();
    assert_eq!(toggle.scheme().queries(), 1);
}

#[test]
fn system_not_queried_when_preference_stored() {
    let mut toggle = toggle_with(MemoryStore::with_entry(STORAGE_KEY, "true"), FixedScheme::light());
    toggle.initialize();
    assert_eq!(toggle.scheme().queries(), 0);
}

#[test]
fn initialize_removes_stale_marker() {
    let mut toggle = PreferenceToggle::new(
        MemoryStore::with_entry(STORAGE_KEY, "false"),
        MemoryRoot::with_class(DARK_CLASS),
        FixedScheme::dark(),
    );
    assert_eq!(toggle.initialize(), ColorMode::Light);
    assert!(!toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn initialize_never_writes() {
    let mut toggle = toggle_with(MemoryStore::new(), FixedScheme::dark());
    toggle.initialize();
    assert!(toggle.store().is_empty());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_to_dark_and_back() {
    let mut toggle = toggle_with(MemoryStore::new(), FixedScheme::light());
    toggle.initialize();

    assert_eq!(toggle.toggle(), ColorMode::Dark);
    assert!(toggle.root().has_marker(DARK_CLASS));
    assert_eq!(stored(&toggle), Some("true"));

    assert_eq!(toggle.toggle(), ColorMode::Light);
    assert!(!toggle.root().has_marker(DARK_CLASS));
    assert_ne!(stored(&toggle), Some("true"));
}

#[test]
fn toggle_twice_restores_visual_and_stored_state() {
    for initial in ["true", "false"] {
        let mut toggle = toggle_with(MemoryStore::with_entry(STORAGE_KEY, initial), FixedScheme::light());
        let start = toggle.initialize();

        toggle.toggle();
        toggle.toggle();

        assert_eq!(toggle.mode(), start);
        assert_eq!(stored(&toggle), Some(initial));
    }
}

#[test]
fn stored_value_mirrors_mode_after_each_toggle() {
    let mut toggle = toggle_with(MemoryStore::new(), FixedScheme::dark());
    toggle.initialize();
    for _ in 0..5 {
        let mode = toggle.toggle();
        assert_eq!(mode, toggle.mode());
        let decoded = ThemePreference::from_stored(stored(&toggle));
        assert_eq!(decoded.resolve(|| !mode.is_dark()), mode);
    }
}

#[test]
fn toggle_touches_exactly_one_key_and_marker() {
    let mut toggle = PreferenceToggle::new(
        MemoryStore::with_entry("unrelated", "x"),
        MemoryRoot::with_class("antialiased"),
        FixedScheme::light(),
    );
    toggle.initialize();
    toggle.toggle();

    assert_eq!(toggle.store().len(), 2);
    assert_eq!(toggle.store().writes(), 1);
    assert_eq!(toggle.store().get("unrelated"), Some("x"));
    assert_eq!(toggle.root().toggles(), 1);
    assert!(toggle.root().has_marker("antialiased"));
}

#[test]
fn toggle_flips_even_when_write_fails() {
    let mut toggle = toggle_with(MemoryStore::new().failing_writes(), FixedScheme::light());
    toggle.initialize();

    assert_eq!(toggle.toggle(), ColorMode::Dark);
    assert!(toggle.root().has_marker(DARK_CLASS));
    assert!(toggle.store().is_empty());

    assert_eq!(toggle.toggle(), ColorMode::Light);
    assert!(!toggle.root().has_marker(DARK_CLASS));
}

#[test]
fn toggle_works_with_disabled_store() {
    let store = MemoryStore::new().failing_reads().failing_writes();
    let mut toggle = toggle_with(store, FixedScheme::dark());
    assert_eq!(toggle.initialize(), ColorMode::Dark);
    assert_eq!(toggle.toggle(), ColorMode::Light);
    assert_eq!(toggle.mode(), ColorMode::Light);
}

#[test]
fn toggle_choice_survives_reload() {
    let mut first = toggle_with(MemoryStore::new(), FixedScheme::dark());
    first.initialize();
    first.toggle();
    let value = stored(&first).map(str::to_owned);

    let store = MemoryStore::with_entry(STORAGE_KEY, value.as_deref().unwrap_or_default());
    let mut second = toggle_with(store, FixedScheme::dark());
    assert_eq!(second.initialize(), ColorMode::Light);
}

// =============================================================
// configuration
// =============================================================

#[test]
fn custom_config_uses_its_names() {
    let config = ThemeConfig {
        storage_key: "portal-dark".into(),
        marker_class: "theme-dark".into(),
        ..ThemeConfig::default()
    };
    let mut toggle =
        PreferenceToggle::with_config(config, MemoryStore::new(), MemoryRoot::new(), FixedScheme::light())
            .unwrap();
    toggle.initialize();
    toggle.toggle();

    assert!(toggle.root().has_marker("theme-dark"));
    assert!(!toggle.root().has_marker(DARK_CLASS));
    assert_eq!(toggle.store().get("portal-dark"), Some("true"));
    assert_eq!(toggle.config().storage_key, "portal-dark");
}

#[test]
fn invalid_config_is_rejected() {
    let config = ThemeConfig { storage_key: String::new(), ..ThemeConfig::default() };
    let result = PreferenceToggle::with_config(config, MemoryStore::new(), MemoryRoot::new(), FixedScheme::light());
    assert!(matches!(result, Err(ConfigError::EmptyStorageKey)));
}
