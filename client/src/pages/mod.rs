//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! The single home page wires the synchronizer and dialog controllers
//! together and leaves rendering to `components`.

pub mod home;
