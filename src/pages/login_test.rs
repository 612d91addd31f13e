use super::*;

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_sign_in_input_accepts_trimmed_fields() {
    assert_eq!(
        validate_sign_in_input("  a@b.com  ", "secret1"),
        Ok(("a@b.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("", "secret1"), Err("Please fill in all fields."));
    assert_eq!(validate_sign_in_input("a@b.com", ""), Err("Please fill in all fields."));
}

#[test]
fn validate_sign_in_input_requires_email_shape() {
    assert_eq!(
        validate_sign_in_input("not-an-email", "secret1"),
        Err("Please enter a valid email address.")
    );
}

#[test]
fn validate_sign_in_input_requires_password_length() {
    assert_eq!(
        validate_sign_in_input("a@b.com", "short"),
        Err("Password must be at least 6 characters long.")
    );
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn friendly_sign_in_error_maps_bad_credentials() {
    assert_eq!(
        friendly_sign_in_error("Invalid login credentials"),
        "Invalid email or password"
    );
}

#[test]
fn friendly_sign_in_error_maps_unconfirmed_email() {
    assert_eq!(
        friendly_sign_in_error("Email not confirmed"),
        "Verify your email before signing in"
    );
}

#[test]
fn friendly_sign_in_error_passes_through_other_messages() {
    assert_eq!(friendly_sign_in_error("request failed: 500"), "request failed: 500");
}
