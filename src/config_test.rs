use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(|_| None);
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(cfg.show_tips);
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "2"),
        ("SHOW_TIPS", "off"),
    ]));
    assert_eq!(cfg.database_url, "sqlite::memory:");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 2);
    assert!(!cfg.show_tips);
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty"), ("DB_MAX_CONNECTIONS", "-1")]));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
}

#[test]
fn blank_database_url_is_ignored() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")]));
    assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
}

#[test]
fn unrecognized_show_tips_keeps_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SHOW_TIPS", "maybe")]));
    assert!(cfg.show_tips);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_bool(""), None);
}
