//! Browser-facing helpers for theme synchronization.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme_sync` holds the synchronizer logic; the other modules wrap the
//! document, `localStorage`, and page globals it touches.

pub mod dark_mode;
pub mod page_flags;
pub mod theme_storage;
pub mod theme_sync;
