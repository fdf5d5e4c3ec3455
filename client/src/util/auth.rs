//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-side route guard already protects `/dashboard`; these helpers
//! apply the same redirect behavior client-side once hydration has resolved
//! the session, so in-app navigation cannot dodge the guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthSession, AuthState};

/// Redirect to the login page whenever auth has resolved to signed-out.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if matches!(auth.get().session, AuthSession::SignedOut) {
            navigate("/auth/login", NavigateOptions::default());
        }
    });
}

/// Sign out: invalidate the server session, clear local auth state, then
/// hard-navigate home so the next render is cleanly signed out.
pub fn sign_out_and_go_home(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            auth.set(AuthState::signed_out());
            crate::util::nav::hard_navigate("/");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
