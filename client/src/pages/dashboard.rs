//! Dashboard page: sidebar plus the section selected by the path.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The server-side guard already
//! redirects anonymous visitors; the client-side redirect below covers
//! in-app navigation after a sign-out.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::sidebar::Sidebar;
use crate::state::auth::{AuthSession, AuthState};
use crate::util::auth::install_unauth_redirect;

fn section_title_for(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "" | "/dashboard" => "Overview",
        "/dashboard/network" => "Alumni Network",
        "/dashboard/jobs" => "Jobs",
        "/dashboard/events" => "Events",
        "/dashboard/settings" => "Settings",
        _ => "Dashboard",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let title = move || section_title_for(&location.pathname.get());

    let content = move || match auth.get().session {
        AuthSession::Unknown => view! { <p class="dashboard__pending">"Loading..."</p> }.into_any(),
        AuthSession::SignedOut => view! { <p class="dashboard__pending">"Redirecting to login..."</p> }.into_any(),
        AuthSession::SignedIn(profile) => {
            let name = profile.display_name();
            let email = profile.email.clone().unwrap_or_default();
            view! {
                <div class="dashboard__content">
                    <p class="dashboard__greeting">{format!("Welcome back, {name}")}</p>
                    <p class="dashboard__email">{email}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <main class="dashboard">
                <h1 class="dashboard__title">{title}</h1>
                {content}
            </main>
        </div>
    }
}
