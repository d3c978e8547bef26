//! Page-owned handle to the theme preference synchronizer.
//!
//! The synchronizer is stored in the reactive arena behind a `Copy` handle
//! that components and event callbacks can capture freely. All spawning
//! happens on the UI thread; outside the browser the handle methods are
//! inert.

use std::sync::Arc;

use leptos::prelude::*;

use super::dialog::PreferenceReload;
use crate::net::api::HttpThemeApi;
use crate::util::dark_mode::DomThemeSurface;
use crate::util::theme_storage::LocalThemeStorage;
use crate::util::theme_sync::ThemeSynchronizer;

/// Synchronizer wired to the live page.
pub type PageThemeSync = ThemeSynchronizer<HttpThemeApi, LocalThemeStorage, DomThemeSurface>;

#[derive(Clone, Copy)]
pub struct ThemeSyncHandle {
    sync: StoredValue<Arc<PageThemeSync>>,
}

impl ThemeSyncHandle {
    pub fn new(sync: PageThemeSync) -> Self {
        Self { sync: StoredValue::new(Arc::new(sync)) }
    }

    /// Page synchronizer for the given error notice signal.
    pub fn for_page(notice: RwSignal<Option<String>>) -> Self {
        Self::new(ThemeSynchronizer::new(
            HttpThemeApi,
            LocalThemeStorage,
            DomThemeSurface::new(notice),
        ))
    }

    /// Load the preference in the background.
    pub fn spawn_load(&self) {
        #[cfg(feature = "hydrate")]
        {
            let sync = self.sync.get_value();
            leptos::task::spawn_local(async move {
                sync.load().await;
            });
        }
    }

    /// Persist the toggle control's new state in the background.
    pub fn spawn_toggle(&self) {
        #[cfg(feature = "hydrate")]
        {
            let sync = self.sync.get_value();
            leptos::task::spawn_local(async move {
                sync.toggle().await;
            });
        }
    }

    /// Reload if the page just went from hidden to visible.
    pub fn spawn_visibility(&self, visible: bool) {
        #[cfg(feature = "hydrate")]
        {
            let sync = self.sync.get_value();
            leptos::task::spawn_local(async move {
                sync.resync_on_visibility(visible).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = visible;
        }
    }

    /// Listen for `visibilitychange` on the document for the page's lifetime.
    pub fn watch_visibility(&self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let handle = *self;
            let doc = document.clone();
            let on_change = Closure::<dyn Fn()>::new(move || handle.spawn_visibility(!doc.hidden()));
            if document
                .add_event_listener_with_callback("visibilitychange", on_change.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not listen for visibility changes");
            }
            on_change.forget();
        }
    }
}

impl PreferenceReload for ThemeSyncHandle {
    fn reload(&self) {
        self.spawn_load();
    }
}
