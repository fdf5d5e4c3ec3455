//! HTTP plumbing between the browser and the portal server.

pub mod api;
pub mod types;
