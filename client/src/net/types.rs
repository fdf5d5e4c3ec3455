//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These mirror the server's profile payloads so serde round-trips stay
//! lossless. Every display field is optional; the auth backend owns the
//! canonical record and may not have populated the profile yet.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Display fields for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Full display name, falling back to the email and then a placeholder.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            (None, Some(last)) => last.to_owned(),
            (None, None) => self.email.clone().unwrap_or_else(|| "Member".to_owned()),
        }
    }

    /// Up to two initials for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        if let Some(c) = self.first_name.as_deref().and_then(|n| n.chars().next()) {
            initials.push(c.to_ascii_uppercase());
        }
        if let Some(c) = self.last_name.as_deref().and_then(|n| n.chars().next()) {
            initials.push(c.to_ascii_uppercase());
        }
        if initials.is_empty() {
            if let Some(c) = self.email.as_deref().and_then(|e| e.chars().next()) {
                initials.push(c.to_ascii_uppercase());
            }
        }
        initials
    }
}
