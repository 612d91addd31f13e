use super::*;

// =============================================================
// Gender parsing
// =============================================================

#[test]
fn parse_gender_accepts_wire_values() {
    assert_eq!(parse_gender("Male"), Some(Gender::Male));
    assert_eq!(parse_gender("Female"), Some(Gender::Female));
    assert_eq!(parse_gender("Other"), Some(Gender::Other));
}

#[test]
fn parse_gender_rejects_placeholder() {
    assert_eq!(parse_gender(""), None);
    assert_eq!(parse_gender("female"), None);
}

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_sign_up_input_builds_pending_profile() {
    let (email, password, profile) =
        validate_sign_up_input(" a@b.com ", "secret1", " Asha Rao ", " 900 ", "Female").unwrap();
    assert_eq!(email, "a@b.com");
    assert_eq!(password, "secret1");
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.full_name, "Asha Rao");
    assert_eq!(profile.phone_number, "900");
    assert_eq!(profile.gender, Gender::Female);
}

#[test]
fn validate_sign_up_input_requires_all_fields() {
    assert_eq!(
        validate_sign_up_input("a@b.com", "secret1", "", "900", "Male"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_sign_up_input("a@b.com", "secret1", "Asha", "", "Male"),
        Err("Please fill in all fields.")
    );
}

#[test]
fn validate_sign_up_input_requires_gender_selection() {
    assert_eq!(
        validate_sign_up_input("a@b.com", "secret1", "Asha", "900", ""),
        Err("Please select a gender.")
    );
}

#[test]
fn validate_sign_up_input_checks_credentials_first() {
    assert_eq!(
        validate_sign_up_input("bad-email", "secret1", "Asha", "900", "Male"),
        Err("Please enter a valid email address.")
    );
    assert_eq!(
        validate_sign_up_input("a@b.com", "short", "Asha", "900", "Male"),
        Err("Password must be at least 6 characters long.")
    );
}
