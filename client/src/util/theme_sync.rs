//! Theme preference synchronizer.
//!
//! DESIGN
//! ======
//! The applied preference lives in three places: the document marker, the
//! browser-local copy, and the server copy. The synchronizer loads from the
//! server (falling back to the local copy), applies, and toggles with an
//! optimistic revert. Network, storage, and document access go through the
//! [`ThemeApi`], [`ThemeStorage`], and [`ThemeSurface`] seams so the logic
//! runs natively under test.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the single UI thread, but requests overlap while
//! suspended. Every toggle takes a ticket from a monotonic counter; a toggle
//! response whose ticket is no longer the newest is discarded without
//! applying or reverting. A load response is discarded when a newer load or
//! any toggle started after it, since the toggle is the more recent intent.
//!
//! The counters are atomics so the page can share the synchronizer through
//! a `Send + Sync` handle; ordering is irrelevant on one thread.

#[cfg(test)]
#[path = "theme_sync_test.rs"]
mod theme_sync_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use prefs::ThemePreference;

pub use crate::net::api::{SyncError, ThemeApi};
pub use crate::util::theme_storage::ThemeStorage;

/// Shown in the settings panel when a toggle is rejected.
pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to update theme preference";

/// Document-facing side effects of applying a preference.
pub trait ThemeSurface {
    /// Set the visual mode marker consumed by styling.
    fn set_mode(&self, theme: ThemePreference);

    /// Checked state of the toggle control, or `None` if it is absent.
    fn toggle_checked(&self) -> Option<bool>;

    /// Set the toggle control's checked state. No-op if it is absent.
    fn set_toggle_checked(&self, checked: bool);

    /// Report a failed toggle to the user.
    fn notify_error(&self, message: &str);

    fn clear_error(&self) {}
}

/// Result of a [`ThemeSynchronizer::load`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Server value applied.
    Remote(ThemePreference),
    /// Server unreachable; local copy (or the light default) applied.
    Local(ThemePreference),
    /// A newer load or toggle owns the state; nothing applied.
    Superseded,
}

/// Result of a [`ThemeSynchronizer::toggle`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Server accepted the new preference and it was applied.
    Applied(ThemePreference),
    /// Server rejected or was unreachable; the prior preference was reapplied.
    Reverted(ThemePreference),
    /// A newer toggle owns the state; nothing applied or reverted.
    Superseded,
    /// No toggle control on the page.
    NoControl,
}

/// Loads, applies, toggles, and re-syncs the theme preference.
pub struct ThemeSynchronizer<A, S, V> {
    api: A,
    storage: S,
    surface: V,
    load_seq: AtomicU64,
    toggle_seq: AtomicU64,
    visible: AtomicBool,
}

impl<A, S, V> ThemeSynchronizer<A, S, V>
where
    A: ThemeApi,
    S: ThemeStorage,
    V: ThemeSurface,
{
    /// The page is assumed visible at construction.
    pub fn new(api: A, storage: S, surface: V) -> Self {
        Self {
            api,
            storage,
            surface,
            load_seq: AtomicU64::new(0),
            toggle_seq: AtomicU64::new(0),
            visible: AtomicBool::new(true),
        }
    }

    /// Local copy, or light when nothing is stored.
    pub fn local_preference(&self) -> ThemePreference {
        self.storage.load().unwrap_or_default()
    }

    /// Set the mode marker, sync the toggle control, and persist locally.
    pub fn apply(&self, theme: ThemePreference) {
        self.surface.set_mode(theme);
        self.surface.set_toggle_checked(theme.is_dark());
        self.storage.save(theme);
    }

    /// Fetch the server preference and apply it, falling back to the local
    /// copy on any failure. Never fails.
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.load_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let toggles_at_start = self.toggle_seq.load(Ordering::Relaxed);

        let result = self.api.fetch_theme().await;

        if self.load_seq.load(Ordering::Relaxed) != ticket
            || self.toggle_seq.load(Ordering::Relaxed) != toggles_at_start
        {
            log::debug!("discarding superseded theme load");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(theme) => {
                self.apply(theme);
                LoadOutcome::Remote(theme)
            }
            Err(e) => {
                log::warn!("error loading theme, using local preference: {e}");
                let theme = self.local_preference();
                self.apply(theme);
                LoadOutcome::Local(theme)
            }
        }
    }

    /// Persist the preference the toggle control now shows. On failure the
    /// control snaps back and the previously stored preference is reapplied.
    pub async fn toggle(&self) -> ToggleOutcome {
        let Some(checked) = self.surface.toggle_checked() else {
            return ToggleOutcome::NoControl;
        };
        let target = ThemePreference::from_checked(checked);
        let previous = self.local_preference();

        let ticket = self.toggle_seq.fetch_add(1, Ordering::Relaxed) + 1;

        let result = self.api.update_theme(target).await;

        if self.toggle_seq.load(Ordering::Relaxed) != ticket {
            log::debug!("discarding superseded theme toggle ({target})");
            return ToggleOutcome::Superseded;
        }

        match result {
            Ok(()) => {
                self.surface.clear_error();
                self.apply(target);
                ToggleOutcome::Applied(target)
            }
            Err(e) => {
                log::error!("{TOGGLE_FAILED_MESSAGE}: {e}");
                self.surface.notify_error(TOGGLE_FAILED_MESSAGE);
                self.surface.set_toggle_checked(!checked);
                self.apply(previous);
                ToggleOutcome::Reverted(previous)
            }
        }
    }

    /// Record a visibility change. Returns `true` exactly when the page went
    /// from hidden to visible.
    pub fn regained_visibility(&self, visible: bool) -> bool {
        let was_visible = self.visible.swap(visible, Ordering::Relaxed);
        visible && !was_visible
    }

    /// Reload from the server if the page just became visible again.
    pub async fn resync_on_visibility(&self, visible: bool) -> Option<LoadOutcome> {
        if self.regained_visibility(visible) { Some(self.load().await) } else { None }
    }
}
