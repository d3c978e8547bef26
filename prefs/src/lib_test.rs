use super::*;

#[test]
fn default_preference_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn parse_accepts_only_known_names() {
    assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
    assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("Dark".parse::<ThemePreference>(), Err(InvalidTheme("Dark".to_owned())));
    assert!("".parse::<ThemePreference>().is_err());
    assert!("invalid".parse::<ThemePreference>().is_err());
}

#[test]
fn checked_state_maps_to_dark() {
    assert_eq!(ThemePreference::from_checked(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_checked(false), ThemePreference::Light);
    assert!(ThemePreference::Dark.is_dark());
    assert!(!ThemePreference::Light.is_dark());
}

#[test]
fn display_matches_wire_name() {
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
    assert_eq!(ThemePreference::Light.to_string(), ThemePreference::Light.as_str());
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
    assert_eq!(json, "\"dark\"");
    let back: ThemePreference = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(back, ThemePreference::Light);
}

#[test]
fn settings_without_theme_field_resolve_to_light() {
    let settings: ThemeSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.theme, None);
    assert_eq!(settings.preference(), Ok(ThemePreference::Light));
}

#[test]
fn settings_with_unknown_theme_are_rejected() {
    let settings: ThemeSettings = serde_json::from_str(r#"{"theme":"sepia"}"#).unwrap();
    assert_eq!(settings.preference(), Err(InvalidTheme("sepia".to_owned())));
}

#[test]
fn settings_serialize_theme_field() {
    let json = serde_json::to_value(ThemeSettings::new(ThemePreference::Dark)).unwrap();
    assert_eq!(json, serde_json::json!({ "theme": "dark" }));
}

#[test]
fn toggle_request_tolerates_missing_theme() {
    let req: ThemeToggleRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(req.theme, None);
    let req: ThemeToggleRequest = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
    assert_eq!(req, ThemeToggleRequest::new(ThemePreference::Dark));
}

#[test]
fn toggle_response_shape() {
    let body = ThemeToggleResponse { success: true, theme: ThemePreference::Dark };
    let json = serde_json::to_value(body).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "theme": "dark" }));
}

#[test]
fn error_body_shape() {
    let json = serde_json::to_value(ErrorBody::new("Invalid theme value")).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Invalid theme value" }));
}

#[test]
fn tips_disable_response_shape() {
    let json = serde_json::to_value(TipsDisableResponse { success: true }).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true }));
}
