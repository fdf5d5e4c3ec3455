//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the client for the external authentication backend; the server
//! keeps no per-request state of its own, so this stays small. Clone is
//! required by Axum — the inner client is Arc-wrapped.

use std::sync::Arc;

use crate::services::session::AuthBackend;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external authentication backend. All session lookups,
    /// credential grants, and sign-outs go through this.
    pub auth: Arc<AuthBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(auth: AuthBackend) -> Self {
        Self { auth: Arc::new(auth) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` pointing at an unreachable auth backend.
    /// Port 9 (discard) refuses connections immediately, so lookup calls
    /// fail fast without touching the network.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let auth = AuthBackend::new("http://127.0.0.1:9".to_owned(), "test-anon-key".to_owned());
        AppState::new(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_clone_shares_auth_backend() {
        let state = test_helpers::test_app_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.auth, &cloned.auth));
    }

    #[test]
    fn test_app_state_uses_unreachable_backend() {
        let state = test_helpers::test_app_state();
        assert_eq!(state.auth.base_url(), "http://127.0.0.1:9");
    }
}
