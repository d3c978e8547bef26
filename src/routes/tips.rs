//! Tips routes: persist dismissal of the tip dialog.

#[cfg(test)]
#[path = "tips_test.rs"]
mod tips_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use prefs::{ErrorBody, TipsDisableResponse};

use crate::services::tips::{self as tips_svc, TipsError};
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

fn tips_error_to_response(err: TipsError) -> ApiError {
    tracing::error!(error = %err, "tips storage failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(err.to_string())))
}

/// `POST /tips/disable`: stop opening the tip dialog on load.
pub async fn disable(State(state): State<AppState>) -> Result<Json<TipsDisableResponse>, ApiError> {
    tips_svc::disable_tips(&state.pool)
        .await
        .map_err(tips_error_to_response)?;
    state.mark_tips_dismissed();
    Ok(Json(TipsDisableResponse { success: true }))
}
