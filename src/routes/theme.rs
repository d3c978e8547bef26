//! Theme routes: read and update the stored display preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use prefs::{ErrorBody, InvalidTheme, ThemeSettings, ThemeToggleRequest, ThemeToggleResponse};

use crate::services::theme::{self as theme_svc, ThemeError};
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn theme_error_to_response(err: ThemeError) -> ApiError {
    let status = match &err {
        ThemeError::InvalidTheme(_) => StatusCode::BAD_REQUEST,
        ThemeError::Database(e) => {
            tracing::error!(error = %e, "theme storage failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorBody::new(err.to_string())))
}

/// `GET /theme/settings`: return the stored preference (light if unset).
pub async fn settings(State(state): State<AppState>) -> Result<Json<ThemeSettings>, ApiError> {
    let theme = theme_svc::load_preference(&state.pool)
        .await
        .map_err(theme_error_to_response)?;
    Ok(Json(ThemeSettings::new(theme)))
}

/// `POST /theme/toggle`: validate and persist a new preference.
///
/// A body that does not decode (non-string `theme`, malformed JSON) is an
/// invalid theme like any unknown name.
pub async fn toggle(
    State(state): State<AppState>,
    body: Result<Json<ThemeToggleRequest>, JsonRejection>,
) -> Result<Json<ThemeToggleResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected theme toggle body");
        theme_error_to_response(InvalidTheme(rejection.body_text()).into())
    })?;

    let theme = theme_svc::parse_theme(body.theme.as_deref()).map_err(|e| {
        tracing::warn!(theme = ?body.theme, "rejected theme toggle");
        theme_error_to_response(e)
    })?;

    theme_svc::save_preference(&state.pool, theme)
        .await
        .map_err(theme_error_to_response)?;

    Ok(Json(ThemeToggleResponse { success: true, theme }))
}
