//! Client-side state containers provided via Leptos context.

pub mod auth;
