use super::*;

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}

#[test]
fn decode_stored_accepts_known_values() {
    assert_eq!(decode_stored(Some("dark")), Some(ThemePreference::Dark));
    assert_eq!(decode_stored(Some("light")), Some(ThemePreference::Light));
}

#[test]
fn decode_stored_ignores_missing_or_unknown_values() {
    assert_eq!(decode_stored(None), None);
    assert_eq!(decode_stored(Some("")), None);
    assert_eq!(decode_stored(Some("true")), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    let storage = LocalThemeStorage;
    storage.save(ThemePreference::Dark);
    assert_eq!(storage.load(), None);
}
