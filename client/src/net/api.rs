//! REST API helpers for communicating with the portal server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration. Sign-in and
//! registration errors carry the message the form shows inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::UserProfile;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign-in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn registration_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response, fallback: String) -> String {
    let body: ErrorBody = resp.json().await.unwrap_or_default();
    body.error.unwrap_or(fallback)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with credentials via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's human-readable message on rejected credentials,
/// or a generic status message when the request itself fails.
pub async fn sign_in(email: &str, password: &str) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = sign_in_failed_message(resp.status());
            return Err(error_from_response(resp, fallback).await);
        }
        resp.json::<UserProfile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Same contract as [`sign_in`].
pub async fn register(email: &str, password: &str, first_name: &str, last_name: &str) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "first_name": first_name,
            "last_name": last_name,
        });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = registration_failed_message(resp.status());
            return Err(error_from_response(resp, fallback).await);
        }
        resp.json::<UserProfile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, first_name, last_name);
        Err("not available on server".to_owned())
    }
}

/// Sign out via `POST /api/auth/logout`. Best-effort; callers follow up
/// with a full-page navigation so the next render is cleanly signed out.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
