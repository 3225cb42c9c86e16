//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read session state from Leptos context
//! providers installed by the root app.

pub mod google_button;
pub mod nav_bar;
pub mod sidebar;
