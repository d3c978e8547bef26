//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the theme toggle and the two dialogs, reading
//! controller handles passed down from the page.

pub mod settings_modal;
pub mod theme_toggle;
pub mod tips_modal;
