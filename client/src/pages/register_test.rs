use super::*;

#[test]
fn validate_register_input_trims_and_reorders() {
    assert_eq!(
        validate_register_input(" Alice ", " Anders ", " a@b.com ", "longenough"),
        Ok((
            "a@b.com".to_owned(),
            "longenough".to_owned(),
            "Alice".to_owned(),
            "Anders".to_owned()
        ))
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "Anders", "a@b.com", "longenough"), Err("All fields are required."));
    assert_eq!(validate_register_input("Alice", "  ", "a@b.com", "longenough"), Err("All fields are required."));
    assert_eq!(validate_register_input("Alice", "Anders", "", "longenough"), Err("All fields are required."));
    assert_eq!(validate_register_input("Alice", "Anders", "a@b.com", ""), Err("All fields are required."));
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(
        validate_register_input("Alice", "Anders", "a@b.com", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_register_input("Alice", "Anders", "a@b.com", "12345678").is_ok());
}
