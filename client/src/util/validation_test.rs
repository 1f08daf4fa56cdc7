use super::*;

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("a.b+tag@mail.example.co"));
    assert!(is_valid_email("x@y.z"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada@example.", "a b@c.d", "a@b@c.d"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn check_email_trims_before_validating() {
    assert_eq!(check_email("  ada@example.com "), Ok(()));
    assert!(check_email("nope").is_err());
}

#[test]
fn password_rules() {
    assert_eq!(check_passwords_match("abc123", "abc123"), Ok(()));
    assert_eq!(check_passwords_match("abc123", "abc124"), Err("Passwords do not match"));
    assert!(check_password_length("12345").is_err());
    assert_eq!(check_password_length("123456"), Ok(()));
    assert_eq!(check_password_length("ééééé"), Err("Password must be at least 6 characters"));
}

#[test]
fn username_must_not_be_blank() {
    assert!(check_username("   ").is_err());
    assert_eq!(check_username("ada"), Ok(()));
}

#[test]
fn signup_reports_first_failure() {
    assert_eq!(validate_signup("", "bad", "1", "2"), Err("Username cannot be empty"));
    assert_eq!(validate_signup("ada", "bad", "1", "2"), Err("Please enter a valid email address."));
    assert_eq!(validate_signup("ada", "a@b.co", "123456", "654321"), Err("Passwords do not match"));
    assert_eq!(validate_signup("ada", "a@b.co", "123", "123"), Err("Password must be at least 6 characters"));
    assert_eq!(validate_signup("ada", "a@b.co", "123456", "123456"), Ok(()));
}

#[test]
fn password_change_requires_all_fields() {
    assert_eq!(validate_password_change("", "x", "x"), Err("Current password is required"));
    assert_eq!(validate_password_change("old", "", ""), Err("New password and confirmation are required"));
    assert_eq!(validate_password_change("old", "newpass", "newpas"), Err("Passwords do not match"));
    assert_eq!(validate_password_change("old", "newpass", "newpass"), Ok(()));
}
