//! Tip and settings dialog controllers.
//!
//! DESIGN
//! ======
//! Each dialog owns an independent two-state machine (closed/open). State is
//! held in an `RwSignal` so views can derive classes from it; transitions
//! that would not change the state are skipped without notifying
//! subscribers, which makes show/close idempotent.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use leptos::prelude::*;

/// Open/closed visibility of one dialog. Initially closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    open: bool,
}

impl DialogState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Open the dialog. Returns whether the state changed.
    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Close the dialog. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Something that can request a fresh preference load.
pub trait PreferenceReload {
    fn reload(&self);
}

/// Something that can remember the tip dialog was dismissed.
pub trait TipsDismissal {
    fn dismiss(&self);
}

/// Records dismissal with `POST /tips/disable`. Failures are logged only;
/// the dialog stays closed for the current page either way.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerTipsDismissal;

impl TipsDismissal for ServerTipsDismissal {
    fn dismiss(&self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            if let Err(e) = crate::net::api::disable_tips().await {
                log::warn!("could not save tip dismissal: {e}");
            }
        });
    }
}

// =============================================================================
// TIP DIALOG
// =============================================================================

/// One-time informational dialog. Closing it records the dismissal so it
/// does not open on the next load.
#[derive(Clone, Copy, Debug)]
pub struct TipsDialog<D> {
    state: RwSignal<DialogState>,
    dismissal: D,
}

impl<D: TipsDismissal> TipsDialog<D> {
    /// Create the controller, opening it immediately if the page asked for it.
    pub fn new(show_on_load: bool, dismissal: D) -> Self {
        let dialog = Self { state: RwSignal::new(DialogState::default()), dismissal };
        if show_on_load {
            dialog.show();
        }
        dialog
    }

    pub fn show(&self) {
        self.state.maybe_update(DialogState::show);
    }

    /// Close the dialog, recording the dismissal only if it was open.
    pub fn close(&self) {
        let mut closed = false;
        self.state.maybe_update(|s| {
            closed = s.close();
            closed
        });
        if closed {
            self.dismissal.dismiss();
        }
    }

    /// Tracked read for views.
    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }
}

// =============================================================================
// SETTINGS DIALOG
// =============================================================================

/// Settings panel. Every open requests a fresh preference load so the panel
/// reflects the latest server value.
#[derive(Clone, Copy, Debug)]
pub struct SettingsDialog<R> {
    state: RwSignal<DialogState>,
    reload: R,
}

impl<R: PreferenceReload> SettingsDialog<R> {
    pub fn new(reload: R) -> Self {
        Self { state: RwSignal::new(DialogState::default()), reload }
    }

    pub fn open(&self) {
        self.state.maybe_update(DialogState::show);
        self.reload.reload();
    }

    pub fn close(&self) {
        self.state.maybe_update(DialogState::close);
    }

    /// Handle a click on the dialog container. Only clicks that land on the
    /// container itself (outside the inner panel) close the dialog.
    pub fn handle_click(&self, target_is_container: bool) {
        if target_is_container {
            self.close();
        }
    }

    /// Tracked read for views.
    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }
}

// =============================================================================
// KEYBOARD
// =============================================================================

pub const ESCAPE_KEY: &str = "Escape";

/// Page-wide Escape handling: close the settings dialog if open, otherwise
/// the tip dialog. Returns whether a dialog was closed.
pub fn close_on_escape<D, R>(key: &str, tips: &TipsDialog<D>, settings: &SettingsDialog<R>) -> bool
where
    D: TipsDismissal,
    R: PreferenceReload,
{
    if key != ESCAPE_KEY {
        return false;
    }
    if settings.state.with_untracked(|s| s.is_open()) {
        settings.close();
        true
    } else if tips.state.with_untracked(|s| s.is_open()) {
        tips.close();
        true
    } else {
        false
    }
}
