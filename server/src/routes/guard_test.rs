use super::*;

// =============================================================================
// classify_path
// =============================================================================

#[test]
fn dashboard_paths_are_protected() {
    assert_eq!(classify_path("/dashboard"), RouteClass::Protected);
    assert_eq!(classify_path("/dashboard/profile"), RouteClass::Protected);
    assert_eq!(classify_path("/dashboard/jobs"), RouteClass::Protected);
}

#[test]
fn login_and_register_are_auth_pages() {
    assert_eq!(classify_path("/auth/login"), RouteClass::Auth);
    assert_eq!(classify_path("/auth/register"), RouteClass::Auth);
}

#[test]
fn everything_else_is_public() {
    assert_eq!(classify_path("/"), RouteClass::Public);
    assert_eq!(classify_path("/events"), RouteClass::Public);
    assert_eq!(classify_path("/alumni"), RouteClass::Public);
    assert_eq!(classify_path("/api/auth/me"), RouteClass::Public);
    // OAuth redirect-out is not a login/register page.
    assert_eq!(classify_path("/auth/oauth/linkedin"), RouteClass::Public);
}

// =============================================================================
// decide — the full outcome table
// =============================================================================

#[test]
fn protected_without_session_redirects_to_login() {
    assert_eq!(decide(RouteClass::Protected, false), GuardDecision::RedirectToLogin);
}

#[test]
fn protected_with_session_passes_through() {
    assert_eq!(decide(RouteClass::Protected, true), GuardDecision::PassThrough);
}

#[test]
fn auth_page_with_session_redirects_home() {
    assert_eq!(decide(RouteClass::Auth, true), GuardDecision::RedirectHome);
}

#[test]
fn auth_page_without_session_passes_through() {
    assert_eq!(decide(RouteClass::Auth, false), GuardDecision::PassThrough);
}

#[test]
fn public_passes_through_regardless_of_session() {
    assert_eq!(decide(RouteClass::Public, false), GuardDecision::PassThrough);
    assert_eq!(decide(RouteClass::Public, true), GuardDecision::PassThrough);
}

// =============================================================================
// login_redirect_target
// =============================================================================

#[test]
fn login_redirect_carries_callback_path() {
    assert_eq!(
        login_redirect_target("/dashboard/profile"),
        "/auth/login?callbackUrl=/dashboard/profile"
    );
}

#[test]
fn login_redirect_for_dashboard_root() {
    assert_eq!(login_redirect_target("/dashboard"), "/auth/login?callbackUrl=/dashboard");
}

// =============================================================================
// end-to-end guard properties from the two pure layers
// =============================================================================

#[test]
fn guard_table_dashboard_profile_no_session() {
    let path = "/dashboard/profile";
    assert_eq!(decide(classify_path(path), false), GuardDecision::RedirectToLogin);
    assert_eq!(login_redirect_target(path), "/auth/login?callbackUrl=/dashboard/profile");
}

#[test]
fn guard_table_login_with_session_goes_home() {
    assert_eq!(decide(classify_path("/auth/login"), true), GuardDecision::RedirectHome);
    assert_eq!(HOME_PATH, "/");
}

#[test]
fn guard_table_root_is_untouched() {
    assert_eq!(decide(classify_path("/"), false), GuardDecision::PassThrough);
    assert_eq!(decide(classify_path("/"), true), GuardDecision::PassThrough);
}
