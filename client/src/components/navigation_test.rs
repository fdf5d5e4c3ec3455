use super::*;

#[test]
fn nav_links_start_with_home() {
    assert_eq!(NAV_LINKS[0], ("Home", "/"));
}

#[test]
fn nav_links_are_absolute_paths() {
    for (label, href) in NAV_LINKS {
        assert!(href.starts_with('/'), "{label} href {href:?} must be absolute");
    }
}

#[test]
fn nav_links_have_unique_hrefs() {
    for (i, (_, a)) in NAV_LINKS.iter().enumerate() {
        for (_, b) in &NAV_LINKS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
