//! Login page with credential sign-in and the LinkedIn OAuth entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard parks unauthenticated dashboard visitors here with a
//! `callbackUrl` query parameter; once sign-in succeeds (or the visitor
//! turns out to be signed in already) the page sends them back there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::{AuthSession, AuthState};

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to send the user after a successful sign-in. Only same-site
/// absolute paths are honored; anything else falls back to home.
#[must_use]
pub fn post_login_target(callback_url: Option<&str>) -> String {
    match callback_url {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let query = use_query_map();
    let callback = Memo::new(move |_| query.with(|q| q.get("callbackUrl").map(|v| v.to_string())));

    // Signed in, whether just now or before arriving: leave for the
    // captured path, or home when none was captured.
    let navigate = use_navigate();
    Effect::new(move || {
        if matches!(auth.get().session, AuthSession::SignedIn(_)) {
            let target = post_login_target(callback.get().as_deref());
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(profile) => auth.set(AuthState::signed_in(profile)),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your alumni account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href="/auth/register" class="login-link">"Sign up"</a>
                </p>
                <div class="login-divider"></div>
                <a href="/auth/oauth/linkedin" rel="external" class="login-button login-button--oauth">
                    "Sign in with LinkedIn"
                </a>
            </div>
        </div>
    }
}
