//! Shared helpers used across pages and components.

pub mod auth;
pub mod nav;
