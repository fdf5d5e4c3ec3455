use super::*;

fn profile(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> UserProfile {
    UserProfile {
        id: "00000000-0000-0000-0000-000000000001".to_owned(),
        email: email.map(str::to_owned),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        avatar_url: None,
    }
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn deserialize_tolerates_missing_optional_fields() {
    let json = r#"{"id":"00000000-0000-0000-0000-000000000001"}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert!(profile.email.is_none());
    assert!(profile.first_name.is_none());
    assert!(profile.avatar_url.is_none());
}

#[test]
fn deserialize_full_profile() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000001",
        "email": "alice@example.com",
        "first_name": "Alice",
        "last_name": "Anders",
        "avatar_url": "https://cdn.example.com/a.png"
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.display_name(), "Alice Anders");
    assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example.com/a.png"));
}

// =============================================================================
// display_name
// =============================================================================

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(profile(Some("Alice"), Some("Anders"), Some("a@b.com")).display_name(), "Alice Anders");
}

#[test]
fn display_name_partial_names() {
    assert_eq!(profile(Some("Alice"), None, None).display_name(), "Alice");
    assert_eq!(profile(None, Some("Anders"), None).display_name(), "Anders");
}

#[test]
fn display_name_falls_back_to_email_then_placeholder() {
    assert_eq!(profile(None, None, Some("a@b.com")).display_name(), "a@b.com");
    assert_eq!(profile(None, None, None).display_name(), "Member");
}

// =============================================================================
// initials
// =============================================================================

#[test]
fn initials_from_both_names() {
    assert_eq!(profile(Some("alice"), Some("anders"), None).initials(), "AA");
}

#[test]
fn initials_from_single_name() {
    assert_eq!(profile(Some("Alice"), None, None).initials(), "A");
}

#[test]
fn initials_fall_back_to_email() {
    assert_eq!(profile(None, None, Some("bob@example.com")).initials(), "B");
}

#[test]
fn initials_empty_profile() {
    assert_eq!(profile(None, None, None).initials(), "");
}
