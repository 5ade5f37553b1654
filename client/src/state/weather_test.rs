use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn load_location_defaults_to_london() {
    assert_eq!(load_location(&MemoryStore::new(), "w1"), "London");
}

#[test]
fn saved_location_is_per_widget() {
    let store = MemoryStore::new();
    save_location(&store, "w1", "Paris");
    assert_eq!(load_location(&store, "w1"), "Paris");
    assert_eq!(load_location(&store, "w2"), "London");
    assert_eq!(store.get("weatherLocation-w1"), Ok(Some("\"Paris\"".to_owned())));
}

#[test]
fn blank_stored_location_falls_back() {
    let store = MemoryStore::with_entries([("weatherLocation-w1", "\"   \"")]);
    assert_eq!(load_location(&store, "w1"), "London");
}

#[test]
fn normalize_search_trims_and_rejects_blank() {
    assert_eq!(normalize_search("  New York "), Ok("New York".to_owned()));
    assert_eq!(normalize_search("   "), Err(EMPTY_LOCATION_MESSAGE));
}
