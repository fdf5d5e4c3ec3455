//! Root application component, router, and SSR shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the auth context consumed by every page and component, kicks off
//! the initial session fetch after hydration, and maps URLs to pages. The
//! server crate renders `shell` for SSR requests.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::navigation::Navigation;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;

/// HTML document shell used by the server for SSR responses.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Auth context: single provider, written only by the sign-in/sign-out
    // paths and the initial fetch below.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::AuthSession;
        leptos::task::spawn_local(async move {
            let session = match crate::net::api::fetch_current_user().await {
                Some(profile) => AuthSession::SignedIn(profile),
                None => AuthSession::SignedOut,
            };
            auth.set(AuthState { session });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Alumni Portal"/>
        <Router>
            <Navigation/>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/auth/login") view=LoginPage/>
                    <Route path=path!("/auth/register") view=RegisterPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/dashboard/*section") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
