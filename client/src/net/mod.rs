//! Networking modules for the theme HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the `ThemeApi` seam and its `gloo-net` implementation; wire
//! bodies are shared with the server through the `prefs` crate.

pub mod api;
