use super::*;

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(THEME_SETTINGS_ENDPOINT, "/theme/settings");
    assert_eq!(THEME_TOGGLE_ENDPOINT, "/theme/toggle");
    assert_eq!(TIPS_DISABLE_ENDPOINT, "/tips/disable");
}

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(400), Err(SyncError::Status(400)));
    assert_eq!(check_status(500), Err(SyncError::Status(500)));
    assert_eq!(check_status(302), Err(SyncError::Status(302)));
}

#[test]
fn parse_settings_body_reads_theme() {
    assert_eq!(parse_settings_body(r#"{"theme":"dark"}"#), Ok(ThemePreference::Dark));
    assert_eq!(parse_settings_body(r#"{"theme":"light"}"#), Ok(ThemePreference::Light));
}

#[test]
fn parse_settings_body_defaults_missing_theme_to_light() {
    assert_eq!(parse_settings_body("{}"), Ok(ThemePreference::Light));
}

#[test]
fn parse_settings_body_rejects_malformed_json() {
    assert!(matches!(parse_settings_body("<html>"), Err(SyncError::Decode(_))));
}

#[test]
fn parse_settings_body_rejects_unknown_theme() {
    assert!(matches!(parse_settings_body(r#"{"theme":"sepia"}"#), Err(SyncError::Decode(_))));
}

#[test]
fn sync_error_messages_are_descriptive() {
    assert_eq!(SyncError::Status(503).to_string(), "server responded with status 503");
    assert_eq!(SyncError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpThemeApi;
    assert_eq!(futures::executor::block_on(api.fetch_theme()), Err(SyncError::Unavailable));
    assert_eq!(
        futures::executor::block_on(api.update_theme(ThemePreference::Dark)),
        Err(SyncError::Unavailable)
    );
    assert_eq!(futures::executor::block_on(disable_tips()), Err(SyncError::Unavailable));
}
