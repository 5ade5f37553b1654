use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn theme_default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn toggled_flips_mode() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert!(ThemeMode::Dark.is_dark());
}

#[test]
fn load_prefers_stored_value_over_system() {
    let store = MemoryStore::with_entries([(THEME_KEY, "\"light\"")]);
    assert_eq!(ThemeMode::load(&store, true), ThemeMode::Light);
}

#[test]
fn load_falls_back_to_system_preference() {
    let store = MemoryStore::new();
    assert_eq!(ThemeMode::load(&store, true), ThemeMode::Dark);
    assert_eq!(ThemeMode::load(&store, false), ThemeMode::Light);
}

#[test]
fn load_ignores_malformed_value() {
    let store = MemoryStore::with_entries([(THEME_KEY, "\"sepia\"")]);
    assert_eq!(ThemeMode::load(&store, false), ThemeMode::Light);
}

#[test]
fn save_writes_lowercase_mode() {
    let store = MemoryStore::new();
    ThemeMode::Dark.save(&store);
    assert_eq!(store.get(THEME_KEY), Ok(Some("\"dark\"".to_owned())));
}

#[test]
fn toggle_label_describes_next_mode() {
    assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark mode");
    assert_eq!(ThemeMode::Dark.toggle_label(), "Switch to light mode");
}
