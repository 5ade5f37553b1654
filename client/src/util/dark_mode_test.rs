#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::THEME_KEY;
use crate::util::storage::MemoryStore;

#[test]
fn system_preference_is_light_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn read_preference_uses_stored_mode() {
    let store = MemoryStore::with_entries([(THEME_KEY, "\"dark\"")]);
    assert_eq!(read_preference(&store), ThemeMode::Dark);
    assert_eq!(read_preference(&MemoryStore::new()), ThemeMode::Light);
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::new();
    assert_eq!(toggle(&store, ThemeMode::Light), ThemeMode::Dark);
    assert_eq!(read_preference(&store), ThemeMode::Dark);
    assert_eq!(toggle(&store, ThemeMode::Dark), ThemeMode::Light);
    assert_eq!(read_preference(&store), ThemeMode::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeMode::Light);
    apply(ThemeMode::Dark);
}
