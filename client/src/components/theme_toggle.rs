//! Dark mode checkbox bound to the preference synchronizer.
//!
//! The checked state is driven imperatively by the synchronizer (it may snap
//! back after a rejected update), so the input carries no reactive binding.

use leptos::prelude::*;

use crate::state::theme::ThemeSyncHandle;
use crate::util::dark_mode::TOGGLE_ELEMENT_ID;

/// Labeled switch that persists the theme on change.
#[component]
pub fn ThemeToggle(theme: ThemeSyncHandle) -> impl IntoView {
    view! {
        <label class="theme-toggle" for=TOGGLE_ELEMENT_ID>
            <span class="theme-toggle__label">"Dark mode"</span>
            <input
                type="checkbox"
                id=TOGGLE_ELEMENT_ID
                class="theme-toggle__input"
                role="switch"
                on:change=move |_| theme.spawn_toggle()
            />
            <span class="theme-toggle__slider" aria-hidden="true"></span>
        </label>
    }
}
