//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. The sign-in,
//! sign-out, and initial-fetch paths are the only writers; navigation and
//! page components are read-only consumers that match on the variant.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// What we currently know about the browser session.
///
/// `Unknown` is the pre-fetch state on first render; consumers must handle
/// it explicitly rather than treating it as signed out, so the UI does not
/// flash the wrong chrome while the profile fetch is in flight.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthSession {
    Unknown,
    SignedOut,
    SignedIn(UserProfile),
}

/// Authentication state held in context.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: AuthSession,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: AuthSession::Unknown }
    }
}

impl AuthState {
    #[must_use]
    pub fn signed_in(profile: UserProfile) -> Self {
        Self { session: AuthSession::SignedIn(profile) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: AuthSession::SignedOut }
    }

    /// The signed-in profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.session {
            AuthSession::SignedIn(profile) => Some(profile),
            AuthSession::Unknown | AuthSession::SignedOut => None,
        }
    }

    /// Whether the initial session fetch has completed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self.session, AuthSession::Unknown)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self.session, AuthSession::SignedIn(_))
    }
}
