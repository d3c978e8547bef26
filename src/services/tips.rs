//! Tips service: remembers that the tip dialog was dismissed.
//!
//! DESIGN
//! ======
//! The dismissal flag shares the single preference row with the theme.
//! Dismissing before any theme was saved creates the row with the light
//! default so the theme read path is unaffected.

#[cfg(test)]
#[path = "tips_test.rs"]
mod tips_test;

use prefs::ThemePreference;
use sqlx::SqlitePool;
use tracing::info;

use super::theme::PREFERENCE_ROW_ID;

#[derive(Debug, thiserror::Error)]
pub enum TipsError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Whether the tip dialog was dismissed. False when no row exists yet.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn tips_disabled(pool: &SqlitePool) -> Result<bool, TipsError> {
    let stored: Option<bool> = sqlx::query_scalar("SELECT tips_disabled FROM theme_preferences WHERE id = ?")
        .bind(PREFERENCE_ROW_ID)
        .fetch_optional(pool)
        .await?;
    Ok(stored.unwrap_or(false))
}

/// Record that the tip dialog should no longer open on load.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn disable_tips(pool: &SqlitePool) -> Result<(), TipsError> {
    sqlx::query(
        "INSERT INTO theme_preferences (id, preference, tips_disabled) VALUES (?, ?, 1)
         ON CONFLICT (id) DO UPDATE SET
             tips_disabled = 1,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
    )
    .bind(PREFERENCE_ROW_ID)
    .bind(ThemePreference::default().as_str())
    .execute(pool)
    .await?;

    info!("tips dialog disabled");
    Ok(())
}
