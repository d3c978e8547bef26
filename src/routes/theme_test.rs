use super::*;
use crate::state::test_helpers;
use prefs::{InvalidTheme, ThemePreference};
use serde_json::{Value, json};

/// Serve the API router on an ephemeral port and return its base URL.
async fn spawn_api() -> String {
    let state = test_helpers::test_app_state().await;
    let app = crate::routes::api_routes(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    format!("http://{addr}")
}

#[test]
fn invalid_theme_maps_to_bad_request() {
    let (status, Json(body)) = theme_error_to_response(ThemeError::InvalidTheme(InvalidTheme("x".into())));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Invalid theme value");
}

#[test]
fn database_error_maps_to_internal_error() {
    let (status, Json(body)) = theme_error_to_response(ThemeError::Database(sqlx::Error::PoolClosed));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.error.starts_with("database error"));
}

#[tokio::test]
async fn settings_endpoint_defaults_to_light() {
    let base = spawn_api().await;
    let resp = reqwest::get(format!("{base}/theme/settings")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "theme": "light" }));
}

#[tokio::test]
async fn toggle_saves_preference() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/theme/toggle"))
        .json(&json!({ "theme": "dark" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["theme"], json!("dark"));
}

#[tokio::test]
async fn toggled_preference_persists_between_requests() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();
    client
        .post(format!("{base}/theme/toggle"))
        .json(&json!({ "theme": "dark" }))
        .send()
        .await
        .unwrap();

    let settings: prefs::ThemeSettings = client
        .get(format!("{base}/theme/settings"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(settings.preference(), Ok(ThemePreference::Dark));
}

#[tokio::test]
async fn invalid_theme_is_rejected_without_changing_preference() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/theme/toggle"))
        .json(&json!({ "theme": "invalid" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body.get("error").is_some());

    let settings: Value = client
        .get(format!("{base}/theme/settings"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(settings["theme"], json!("light"));
}

#[tokio::test]
async fn missing_theme_field_is_rejected() {
    let base = spawn_api().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/theme/toggle"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_string_theme_is_rejected_with_error_body() {
    let base = spawn_api().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/theme/toggle"))
        .json(&json!({ "theme": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid theme value" }));
}

#[tokio::test]
async fn malformed_toggle_body_is_rejected() {
    let base = spawn_api().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/theme/toggle"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], json!("Invalid theme value"));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let base = spawn_api().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
