//! Route guard middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every request before the SSR and API routes. Classifies the path,
//! resolves the session through the auth backend, and either forwards the
//! request or redirects: unauthenticated callers away from the dashboard,
//! authenticated callers away from the login/register pages.
//!
//! DESIGN
//! ======
//! The decision is a pure function of (path class, session present), kept
//! separate from the middleware so the whole outcome table is unit-testable.
//! Session presence has one source of truth: the backend lookup. A session
//! lookup failure is treated as signed-out, so protected routes fail closed.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;

use crate::routes::auth::{self, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::services::session::{self, Session};
use crate::state::AppState;

pub const PROTECTED_PREFIX: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const HOME_PATH: &str = "/";

/// Path classification. Recomputed per request from the path string alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session (`/dashboard` and below).
    Protected,
    /// Login/register pages; pointless for signed-in callers.
    Auth,
    /// Everything else; the guard never touches these.
    Public,
}

/// One of the three guard outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    PassThrough,
    RedirectToLogin,
    RedirectHome,
}

#[must_use]
pub fn classify_path(path: &str) -> RouteClass {
    if path.starts_with(PROTECTED_PREFIX) {
        RouteClass::Protected
    } else if path.starts_with(LOGIN_PATH) || path.starts_with(REGISTER_PATH) {
        RouteClass::Auth
    } else {
        RouteClass::Public
    }
}

/// The guard outcome table: (class, has-session) -> decision.
#[must_use]
pub fn decide(class: RouteClass, has_session: bool) -> GuardDecision {
    match (class, has_session) {
        (RouteClass::Protected, false) => GuardDecision::RedirectToLogin,
        (RouteClass::Auth, true) => GuardDecision::RedirectHome,
        _ => GuardDecision::PassThrough,
    }
}

/// Login redirect target carrying the originally requested path, so the
/// login page can send the caller back there after success.
#[must_use]
pub fn login_redirect_target(path: &str) -> String {
    format!("{LOGIN_PATH}?callbackUrl={path}")
}

/// Axum middleware enforcing the guard on every request.
pub async fn guard(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let class = classify_path(&path);

    // Public paths are forwarded untouched, without a session lookup.
    if class == RouteClass::Public {
        return next.run(request).await;
    }

    let access = jar.get(ACCESS_COOKIE).map(Cookie::value);
    let refresh = jar.get(REFRESH_COOKIE).map(Cookie::value);
    let session: Option<Session> = match session::resolve_session(&state.auth, access, refresh).await {
        Ok(session) => session,
        Err(e) => {
            // Fail closed: an unreachable backend must not open the dashboard.
            tracing::warn!(error = %e, %path, "session lookup failed, treating as signed out");
            None
        }
    };

    let response = match decide(class, session.is_some()) {
        GuardDecision::PassThrough => next.run(request).await,
        GuardDecision::RedirectToLogin => Redirect::temporary(&login_redirect_target(&path)).into_response(),
        GuardDecision::RedirectHome => Redirect::temporary(HOME_PATH).into_response(),
    };

    // Sync any cookies the refresh-token exchange produced, redirects included.
    if let Some(pair) = session.and_then(|s| s.refreshed) {
        let jar = CookieJar::new()
            .add(auth::access_cookie(&pair))
            .add(auth::refresh_cookie(&pair));
        return (jar, response).into_response();
    }

    response
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
