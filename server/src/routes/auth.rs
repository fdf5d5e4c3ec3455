//! Auth routes — credential sign-in/up, sign-out, session introspection,
//! and the OAuth redirect-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! These handlers are the browser-facing face of the external auth backend.
//! They translate JSON requests into backend calls and backend token pairs
//! into HttpOnly cookies; no auth decision is made here.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::session::{self, SessionError, TokenPair};
use crate::state::AppState;

pub(crate) const ACCESS_COOKIE: &str = "portal_access_token";
pub(crate) const REFRESH_COOKIE: &str = "portal_refresh_token";

/// Identity provider selected by the OAuth button.
const OAUTH_PROVIDER: &str = "linkedin_oidc";

const DEFAULT_ACCESS_TTL_SECS: i64 = 3600;
const REFRESH_TTL_DAYS: i64 = 30;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Public origin of this portal, used for OAuth return URLs and the
/// secure-cookie inference.
pub(crate) fn site_url() -> String {
    std::env::var("PUBLIC_SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }
    site_url().starts_with("https://")
}

// =============================================================================
// COOKIE BUILDERS
// =============================================================================

pub(crate) fn access_cookie(pair: &TokenPair) -> Cookie<'static> {
    let ttl = pair.expires_in.unwrap_or(DEFAULT_ACCESS_TTL_SECS);
    Cookie::build((ACCESS_COOKIE, pair.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::seconds(ttl))
        .build()
}

pub(crate) fn refresh_cookie(pair: &TokenPair) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, pair.refresh_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(REFRESH_TTL_DAYS))
        .build()
}

pub(crate) fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// `POST /api/auth/login` — password grant, set session cookies.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(req): Json<LoginRequest>) -> Response {
    match session::sign_in(&state.auth, &req.email, &req.password).await {
        Ok(signed) => {
            let jar = jar.add(access_cookie(&signed.tokens)).add(refresh_cookie(&signed.tokens));
            (jar, Json(signed.user)).into_response()
        }
        Err(SessionError::InvalidCredentials(message)) => {
            (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": message }))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "sign-in call to auth backend failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "authentication service unavailable" })),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

/// `POST /api/auth/register` — create an account; cookies are set when the
/// backend issues a session straight away.
pub async fn register(State(state): State<AppState>, jar: CookieJar, Json(req): Json<RegisterRequest>) -> Response {
    match session::register(&state.auth, &req.email, &req.password, &req.first_name, &req.last_name).await {
        Ok(signed) => {
            let jar = jar.add(access_cookie(&signed.tokens)).add(refresh_cookie(&signed.tokens));
            (jar, Json(signed.user)).into_response()
        }
        Err(SessionError::InvalidCredentials(message)) => {
            (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": message }))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "signup call to auth backend failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "authentication service unavailable" })),
            )
                .into_response()
        }
    }
}

/// `POST /api/auth/logout` — invalidate the backend session, expire cookies.
/// Cookie clearing happens even when the backend call fails.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(ACCESS_COOKIE).map(Cookie::value) {
        if let Err(e) = session::sign_out(&state.auth, token).await {
            tracing::warn!(error = %e, "backend sign-out failed, clearing cookies anyway");
        }
    }

    let jar = CookieJar::new()
        .add(expired_cookie(ACCESS_COOKIE))
        .add(expired_cookie(REFRESH_COOKIE));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me` — resolve the cookie session and return the profile.
/// Syncs refreshed cookies when the resolver had to exchange a refresh token.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let access = jar.get(ACCESS_COOKIE).map(Cookie::value);
    let refresh = jar.get(REFRESH_COOKIE).map(Cookie::value);

    match session::resolve_session(&state.auth, access, refresh).await {
        Ok(Some(session)) => {
            if let Some(pair) = &session.refreshed {
                let jar = CookieJar::new().add(access_cookie(pair)).add(refresh_cookie(pair));
                (jar, Json(session.user)).into_response()
            } else {
                Json(session.user).into_response()
            }
        }
        Ok(None) => StatusCode::UNAUTHORIZED.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed");
            StatusCode::UNAUTHORIZED.into_response()
        }
    }
}

/// `GET /auth/oauth/linkedin` — phase one of the OAuth flow: send the
/// browser to the backend's authorize page with a return URL. The code
/// exchange and session issuance are owned by the backend.
pub async fn oauth_linkedin(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.auth.authorize_url(OAUTH_PROVIDER, &site_url()))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
