//! REST API helpers for the theme endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`SyncError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, and undecodable bodies are
//! distinct [`SyncError`] variants, but callers treat them all as "could not
//! sync" and fall back to a locally known value.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use prefs::ThemePreference;

pub const THEME_SETTINGS_ENDPOINT: &str = "/theme/settings";
pub const THEME_TOGGLE_ENDPOINT: &str = "/theme/toggle";
pub const TIPS_DISABLE_ENDPOINT: &str = "/tips/disable";

/// Why a preference could not be synchronized with the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Network seam used by the preference synchronizer.
pub trait ThemeApi {
    /// `GET /theme/settings`.
    fn fetch_theme(&self) -> impl Future<Output = Result<ThemePreference, SyncError>>;

    /// `POST /theme/toggle`. Success carries no required body.
    fn update_theme(&self, theme: ThemePreference) -> impl Future<Output = Result<(), SyncError>>;
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), SyncError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SyncError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_settings_body(body: &str) -> Result<ThemePreference, SyncError> {
    let settings: prefs::ThemeSettings =
        serde_json::from_str(body).map_err(|e| SyncError::Decode(e.to_string()))?;
    settings
        .preference()
        .map_err(|e| SyncError::Decode(e.to_string()))
}

/// [`ThemeApi`] backed by same-origin HTTP requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpThemeApi;

impl ThemeApi for HttpThemeApi {
    async fn fetch_theme(&self) -> Result<ThemePreference, SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(THEME_SETTINGS_ENDPOINT)
                .send()
                .await
                .map_err(|e| SyncError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            let body = resp
                .text()
                .await
                .map_err(|e| SyncError::Transport(e.to_string()))?;
            parse_settings_body(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SyncError::Unavailable)
        }
    }

    async fn update_theme(&self, theme: ThemePreference) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(THEME_TOGGLE_ENDPOINT)
                .json(&prefs::ThemeToggleRequest::new(theme))
                .map_err(|e| SyncError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SyncError::Transport(e.to_string()))?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(SyncError::Unavailable)
        }
    }
}

/// `POST /tips/disable`: stop the tip dialog opening on later loads.
///
/// # Errors
///
/// Returns a [`SyncError`] if the request fails or is rejected.
pub async fn disable_tips() -> Result<(), SyncError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(TIPS_DISABLE_ENDPOINT)
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SyncError::Unavailable)
    }
}
