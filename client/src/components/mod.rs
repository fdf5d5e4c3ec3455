//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and read auth state from the Leptos
//! context provider installed at the app root.

pub mod navigation;
pub mod sidebar;
