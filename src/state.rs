//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the SQLite pool that stores the server-side copy of the theme
//! preference, plus the page flags the SSR shell needs.
//!
//! The tip dismissal flag is mirrored in memory so the synchronous SSR shell
//! can read it per request; the route that sets it writes the database
//! first.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sqlx::SqlitePool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the pool is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Whether tips are enabled for this deployment at all.
    pub show_tips: bool,
    tips_dismissed: Arc<AtomicBool>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: SqlitePool, show_tips: bool, tips_dismissed: bool) -> Self {
        Self { pool, show_tips, tips_dismissed: Arc::new(AtomicBool::new(tips_dismissed)) }
    }

    /// Whether the page should open the tip dialog on load.
    #[must_use]
    pub fn tips_on_load(&self) -> bool {
        self.show_tips && !self.tips_dismissed.load(Ordering::Relaxed)
    }

    pub fn mark_tips_dismissed(&self) {
        self.tips_dismissed.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

// =============================================================================
// TEST HELPERS
// =============================================================================
