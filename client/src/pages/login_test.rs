use super::*;

// =============================================================================
// validate_login_input
// =============================================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
}

// =============================================================================
// post_login_target
// =============================================================================

#[test]
fn post_login_target_uses_captured_callback() {
    assert_eq!(post_login_target(Some("/dashboard/jobs")), "/dashboard/jobs");
}

#[test]
fn post_login_target_defaults_to_home() {
    assert_eq!(post_login_target(None), "/");
}

#[test]
fn post_login_target_rejects_external_urls() {
    assert_eq!(post_login_target(Some("https://evil.example.com")), "/");
    assert_eq!(post_login_target(Some("//evil.example.com")), "/");
    assert_eq!(post_login_target(Some("")), "/");
}
