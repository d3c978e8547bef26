//! Browser `localStorage` copy of the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The local copy is the fallback when the server cannot be reached. Reads
//! and writes are best-effort: an unavailable storage area behaves like an
//! empty one, and SSR paths no-op.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use prefs::ThemePreference;

/// Key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Local persisted copy used by the preference synchronizer.
pub trait ThemeStorage {
    /// Stored preference, or `None` when absent or unreadable.
    fn load(&self) -> Option<ThemePreference>;

    fn save(&self, theme: ThemePreference);
}

/// Parse a raw stored value. Unknown strings are ignored.
pub fn decode_stored(raw: Option<&str>) -> Option<ThemePreference> {
    raw.and_then(|v| v.parse().ok())
}

/// [`ThemeStorage`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Option<ThemePreference> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten();
            decode_stored(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, theme: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("could not persist theme preference locally");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
