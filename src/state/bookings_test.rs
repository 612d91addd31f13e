use super::*;

#[test]
fn bookings_state_default_is_loading_and_empty() {
    let state = BookingsState::default();
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.completing_id.is_none());
}
