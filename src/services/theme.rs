//! Theme service: server-side copy of the display preference.
//!
//! DESIGN
//! ======
//! A single row (`id = 1`) in `theme_preferences` holds the preference.
//! Reads fall back to light when the row has never been written; writes
//! upsert so the first toggle creates the row.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use prefs::{InvalidTheme, ThemePreference};
use sqlx::SqlitePool;
use tracing::info;

pub(crate) const PREFERENCE_ROW_ID: i64 = 1;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Invalid theme value")]
    InvalidTheme(#[from] InvalidTheme),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Validate a raw theme name received from a client.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidTheme`] for a missing or unknown name.
pub fn parse_theme(raw: Option<&str>) -> Result<ThemePreference, ThemeError> {
    let raw = raw.unwrap_or_default();
    Ok(raw.parse::<ThemePreference>()?)
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Load the stored preference, or light if none was ever saved.
///
/// A stored value that no longer parses is treated as absent.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn load_preference(pool: &SqlitePool) -> Result<ThemePreference, ThemeError> {
    let stored: Option<String> = sqlx::query_scalar("SELECT preference FROM theme_preferences WHERE id = ?")
        .bind(PREFERENCE_ROW_ID)
        .fetch_optional(pool)
        .await?;

    Ok(stored
        .and_then(|raw| raw.parse::<ThemePreference>().ok())
        .unwrap_or_default())
}

/// Persist `theme` as the current preference.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn save_preference(pool: &SqlitePool, theme: ThemePreference) -> Result<(), ThemeError> {
    sqlx::query(
        "INSERT INTO theme_preferences (id, preference) VALUES (?, ?)
         ON CONFLICT (id) DO UPDATE SET
             preference = excluded.preference,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
    )
    .bind(PREFERENCE_ROW_ID)
    .bind(theme.as_str())
    .execute(pool)
    .await?;

    info!(%theme, "theme preference saved");
    Ok(())
}
