use super::*;

#[test]
fn sign_in_failed_message_includes_status() {
    assert_eq!(sign_in_failed_message(401), "sign-in failed: 401");
    assert_eq!(sign_in_failed_message(502), "sign-in failed: 502");
}

#[test]
fn registration_failed_message_includes_status() {
    assert_eq!(registration_failed_message(400), "registration failed: 400");
}
