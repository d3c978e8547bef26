//! Client-side UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dialog controllers are constructed once by the page and shared with the
//! components that render them; there is no global registry.

pub mod dialog;
pub mod theme;
