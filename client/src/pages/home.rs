//! Home page: header with settings access, tip dialog, and settings dialog.
//!
//! ARCHITECTURE
//! ============
//! The page constructs the synchronizer and both dialog controllers exactly
//! once and hands them to child components by value (they are `Copy`
//! handles). Browser-only startup runs in an effect so it never executes
//! during SSR: read the tip flag, load the preference, then start watching
//! page visibility and the Escape key.

use leptos::prelude::*;

use crate::components::settings_modal::SettingsModal;
use crate::components::tips_modal::TipsModal;
use crate::state::dialog::{ServerTipsDismissal, SettingsDialog, TipsDialog};
#[cfg(feature = "hydrate")]
use crate::state::dialog::close_on_escape;
use crate::state::theme::ThemeSyncHandle;
use crate::util::page_flags::show_tips_flag;

#[component]
pub fn HomePage() -> impl IntoView {
    let notice = RwSignal::new(None::<String>);
    let theme = ThemeSyncHandle::for_page(notice);
    let tips = TipsDialog::new(false, ServerTipsDismissal);
    let settings = SettingsDialog::new(theme);

    Effect::new(move |_| {
        if show_tips_flag() {
            tips.show();
        }
        theme.spawn_load();
        theme.watch_visibility();
        watch_escape(tips, settings);
    });

    view! {
        <header class="page-header">
            <h1 class="page-header__title">"themesync"</h1>
            <nav class="page-header__actions">
                <button type="button" class="btn" on:click=move |_| tips.show()>
                    "Tips"
                </button>
                <button type="button" class="btn" on:click=move |_| settings.open()>
                    "Settings"
                </button>
            </nav>
        </header>

        <main class="page-body">
            <p>"Your display preference is saved on the server and in this browser."</p>
        </main>

        <TipsModal tips=tips/>
        <SettingsModal settings=settings theme=theme notice=notice/>
    }
}

/// Close the topmost open dialog on Escape, wherever focus is.
fn watch_escape(tips: TipsDialog<ServerTipsDismissal>, settings: SettingsDialog<ThemeSyncHandle>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let on_keydown = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if close_on_escape(&ev.key(), &tips, &settings) {
                ev.prevent_default();
            }
        });
        if window
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not listen for Escape");
        }
        on_keydown.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tips, settings);
    }
}
