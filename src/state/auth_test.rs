use super::*;
use crate::net::types::Gender;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.user_id().is_none());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

#[test]
fn user_id_reads_from_signed_in_user() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            full_name: "Asha".to_owned(),
            phone_number: "900".to_owned(),
            gender: Gender::Female,
            rides_given: 0,
            rides_taken: 0,
            created_at: String::new(),
        }),
        loading: false,
    };
    assert_eq!(state.user_id().as_deref(), Some("u1"));
}
