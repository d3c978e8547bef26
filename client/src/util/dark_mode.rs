//! Document-level theme marker and the theme toggle control.
//!
//! Applies a `data-theme` attribute to the `<html>` element and reads or
//! writes the checked state of the `#darkModeToggle` checkbox. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The toggle control is looked up by id on every use instead of being
//! cached, so a control that is absent (or re-rendered) is handled by the
//! same presence check. SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use leptos::prelude::*;
use prefs::ThemePreference;

use super::theme_sync::ThemeSurface;

/// Attribute on `<html>` consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the checkbox-style theme toggle.
pub const TOGGLE_ELEMENT_ID: &str = "darkModeToggle";

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[cfg(feature = "hydrate")]
fn toggle_input() -> Option<web_sys::HtmlInputElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(TOGGLE_ELEMENT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

/// [`ThemeSurface`] over the live document.
///
/// Error notices land in a signal that the settings panel renders.
#[derive(Clone, Copy)]
pub struct DomThemeSurface {
    notice: RwSignal<Option<String>>,
}

impl DomThemeSurface {
    pub fn new(notice: RwSignal<Option<String>>) -> Self {
        Self { notice }
    }
}

impl ThemeSurface for DomThemeSurface {
    fn set_mode(&self, theme: ThemePreference) {
        apply(theme);
    }

    fn toggle_checked(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            toggle_input().map(|input| input.checked())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_toggle_checked(&self, checked: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = toggle_input() {
                input.set_checked(checked);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = checked;
        }
    }

    fn notify_error(&self, message: &str) {
        self.notice.set(Some(message.to_owned()));
    }

    fn clear_error(&self) {
        self.notice.maybe_update(|notice| notice.take().is_some());
    }
}
