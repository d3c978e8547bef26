//! Settings dialog containing the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog container (`#settingsModal`) doubles as the backdrop: a click
//! whose target is the container itself closes the dialog, while clicks in
//! the inner panel bubble up with a different target and are ignored. The
//! toggle stays mounted while the dialog is closed so the synchronizer can
//! always reach it. Escape is handled page-wide by [`crate::pages::home`].

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::dialog::SettingsDialog;
use crate::state::theme::ThemeSyncHandle;

#[component]
pub fn SettingsModal(
    settings: SettingsDialog<ThemeSyncHandle>,
    theme: ThemeSyncHandle,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_container_click = move |ev: leptos::ev::MouseEvent| {
        settings.handle_click(ev.target() == ev.current_target());
    };

    view! {
        <div
            id="settingsModal"
            class=move || if settings.is_open() { "modal-overlay active" } else { "modal-overlay" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="settingsModalTitle"
            on:click=on_container_click
        >
            <div class="modal__panel" tabindex="0">
                <div class="modal__header">
                    <h2 id="settingsModalTitle">"Settings"</h2>
                    <button
                        type="button"
                        class="modal__close"
                        aria-label="Close settings"
                        title="Close settings"
                        on:click=move |_| settings.close()
                    >
                        "✕"
                    </button>
                </div>

                <ThemeToggle theme=theme/>

                <Show when=move || notice.with(Option::is_some)>
                    <p class="settings__notice" role="alert">
                        <span>{move || notice.get().unwrap_or_default()}</span>
                        <button type="button" class="settings__notice-dismiss" on:click=move |_| notice.set(None)>
                            "Dismiss"
                        </button>
                    </p>
                </Show>
            </div>
        </div>
    }
}
