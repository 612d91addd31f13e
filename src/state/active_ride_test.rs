use super::*;
use crate::net::types::{GeoPoint, RideStatus};

fn ride() -> Ride {
    Ride {
        id: "r1".to_owned(),
        driver_id: "u1".to_owned(),
        source: GeoPoint { latitude: 17.4, longitude: 78.5 },
        intermediate_points: vec![],
        destination: GeoPoint { latitude: 18.0, longitude: 79.0 },
        vehicle_type_id: "v1".to_owned(),
        available_seats: 3,
        fare: 100.0,
        female_only: false,
        status: RideStatus::Active,
        created_at: String::new(),
        driver: None,
        vehicle_type: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn active_ride_state_default_has_no_ride() {
    let state = ActiveRideState::default();
    assert!(!state.has_active_ride());
    assert!(state.role.is_none());
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Role queries
// =============================================================

#[test]
fn driver_side_ride_reports_driver_role() {
    let state = ActiveRideState {
        ride: Some(ride()),
        role: Some(ActiveRole::Driver),
        loading: false,
        error: None,
    };
    assert!(state.has_active_ride());
    assert!(state.is_driver());
}

#[test]
fn passenger_side_ride_is_not_driver() {
    let state = ActiveRideState {
        ride: Some(ride()),
        role: Some(ActiveRole::Passenger),
        loading: false,
        error: None,
    };
    assert!(state.has_active_ride());
    assert!(!state.is_driver());
}
