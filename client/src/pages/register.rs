//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthSession, AuthState};

const MIN_PASSWORD_LEN: usize = 8;

/// Validated registration fields in submission order:
/// email, password, first name, last name.
type RegistrationInput = (String, String, String, String);

fn validate_register_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationInput, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((email.to_owned(), password.to_owned(), first_name.to_owned(), last_name.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // A freshly created (or already present) session leaves for home.
    let navigate = use_navigate();
    Effect::new(move || {
        if matches!(auth.get().session, AuthSession::SignedIn(_)) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let validated = validate_register_input(&first_name.get(), &last_name.get(), &email.get(), &password.get());
        let (email_value, password_value, first_value, last_value) = match validated {
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
            match crate::net::api::register(&email_value, &password_value, &first_value, &last_value).await {
                Ok(profile) => auth.set(AuthState::signed_in(profile)),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, first_value, last_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Join the Network"</h1>
                <p class="login-card__subtitle">"Create your alumni account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "First Name"
                        <input
                            class="login-input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="login-label">
                        "Last Name"
                        <input
                            class="login-input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
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
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/auth/login" class="login-link">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
