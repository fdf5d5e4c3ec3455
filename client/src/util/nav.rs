//! Navigation helpers shared by the navbar and sidebar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Full-page navigation, bypassing the client router. Used after sign-out
/// and for the OAuth redirect-out, where the server must see the request.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Class string for a nav link, marking the current path active.
#[must_use]
pub fn link_class(base: &str, current_path: &str, href: &str) -> String {
    if current_path == href {
        format!("{base} {base}--active")
    } else {
        base.to_owned()
    }
}
