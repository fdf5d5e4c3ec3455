//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home">
            <section class="home__hero">
                <h1 class="home__title">"Alumni Portal"</h1>
                <p class="home__tagline">
                    "Reconnect with classmates, discover events, and grow your professional network."
                </p>
                <Show when=move || !auth.get().is_signed_in()>
                    <div class="home__actions">
                        <a href="/auth/register" class="home__cta">"Join the Network"</a>
                        <a href="/auth/login" class="home__cta home__cta--ghost">"Sign In"</a>
                    </div>
                </Show>
                <Show when=move || auth.get().is_signed_in()>
                    <div class="home__actions">
                        <a href="/dashboard" class="home__cta">"Go to Dashboard"</a>
                    </div>
                </Show>
            </section>
        </div>
    }
}
