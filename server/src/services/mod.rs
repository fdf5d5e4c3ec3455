//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own calls into the external authentication backend so
//! route handlers can stay focused on protocol translation and cookie
//! plumbing.

pub mod session;
