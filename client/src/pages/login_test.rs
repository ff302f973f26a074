use super::*;

#[test]
fn validate_login_input_trims_email_into_username() {
    assert_eq!(
        validate_login_input("  ada@example.com ", "secret1"),
        Ok(LoginCredentials { username: "ada@example.com".to_owned(), password: "secret1".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("a@b.c", " spaced ").unwrap();
    assert_eq!(creds.password, " spaced ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("a@b.c", ""), Err(MISSING_FIELDS));
}
