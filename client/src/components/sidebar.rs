//! Dashboard sidebar with section links and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out_and_go_home;
use crate::util::nav::link_class;

/// Dashboard sections, in display order.
pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("Overview", "/dashboard"),
    ("Alumni Network", "/dashboard/network"),
    ("Jobs", "/dashboard/jobs"),
    ("Events", "/dashboard/events"),
    ("Settings", "/dashboard/settings"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let items = move || {
        let current = location.pathname.get();
        MENU_ITEMS
            .iter()
            .map(|(label, href)| {
                view! {
                    <li class="sidebar__item">
                        <a href=*href class=link_class("sidebar__link", &current, href)>
                            {*label}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Alumni Dashboard"</div>
            <nav class="sidebar__nav">
                <ul class="sidebar__list">{items}</ul>
            </nav>
            <button class="sidebar__logout" on:click=move |_| sign_out_and_go_home(auth)>
                "Logout"
            </button>
        </aside>
    }
}
