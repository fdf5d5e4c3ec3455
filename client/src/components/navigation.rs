//! Top navigation bar with auth-conditioned identity menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every page. The right-hand side is an exhaustive match on the
//! auth session: signed-in users get the identity dropdown, signed-out users
//! get sign-in/sign-up buttons, and the pre-fetch state renders neither so
//! the chrome never flashes wrong while the profile fetch is in flight.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthSession, AuthState};
use crate::util::auth::sign_out_and_go_home;
use crate::util::nav::link_class;

/// Static portal links shown to everyone.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Events", "/events"),
    ("Alumni", "/alumni"),
    ("About", "/about"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let menu_open = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    let links = move || {
        let current = location.pathname.get();
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a href=*href class=link_class("nav__link", &current, href)>
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let auth_section = move || match auth.get().session {
        AuthSession::Unknown => view! { <span class="nav__auth-pending"></span> }.into_any(),
        AuthSession::SignedOut => view! {
            <div class="nav__signed-out">
                <a href="/auth/login" class="nav__button nav__button--ghost">"Sign In"</a>
                <a href="/auth/register" class="nav__button">"Sign Up"</a>
            </div>
        }
        .into_any(),
        AuthSession::SignedIn(profile) => {
            let name = profile.display_name();
            let email = profile.email.clone().unwrap_or_default();
            let initials = profile.initials();
            let avatar = profile.avatar_url.clone();
            view! {
                <div class="nav__identity">
                    <button
                        class="nav__avatar"
                        title="Account menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {match avatar {
                            Some(url) => view! { <img class="nav__avatar-image" src=url alt="Avatar"/> }.into_any(),
                            None => view! { <span class="nav__avatar-initials">{initials}</span> }.into_any(),
                        }}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="nav__menu">
                            <div class="nav__menu-header">
                                <p class="nav__menu-name">{name.clone()}</p>
                                <p class="nav__menu-email">{email.clone()}</p>
                            </div>
                            <a href="/dashboard" class="nav__menu-item" on:click=move |_| menu_open.set(false)>
                                "Dashboard"
                            </a>
                            <a href="/dashboard/settings" class="nav__menu-item" on:click=move |_| menu_open.set(false)>
                                "Settings"
                            </a>
                            <button
                                class="nav__menu-item nav__menu-item--signout"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    sign_out_and_go_home(auth);
                                }
                            >
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <nav class="nav" aria-label="Main navigation">
            <div class="nav__inner">
                <a href="/" class="nav__brand">
                    <span class="nav__brand-name">"Alumni Portal"</span>
                </a>
                <div class="nav__links">{links}</div>
                <div class="nav__auth">{auth_section}</div>
                <button
                    class="nav__mobile-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || mobile_open.get()>
                <div class="nav__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="nav__mobile-link" on:click=move |_| mobile_open.set(false)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <a href="/auth/login" class="nav__mobile-link" on:click=move |_| mobile_open.set(false)>
                        "Sign In"
                    </a>
                    <a href="/auth/register" class="nav__mobile-link" on:click=move |_| mobile_open.set(false)>
                        "Sign Up"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
