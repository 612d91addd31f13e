use super::*;
use crate::net::types::{GeoPoint, RideStatus};
use crate::util::geo::PointKind;

fn ride() -> Ride {
    Ride {
        id: "r1".to_owned(),
        driver_id: "u1".to_owned(),
        source: GeoPoint { latitude: 17.4, longitude: 78.5 },
        intermediate_points: vec![GeoPoint { latitude: 17.5, longitude: 78.6 }],
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

#[test]
fn rides_select_joins_driver_and_vehicle() {
    assert_eq!(RIDES_SELECT, "*,drivers:driver_id(full_name),vehicle_types(*)");
}

#[test]
fn booking_for_builds_pending_single_seat_booking() {
    let points = route_points(&ride());
    let booking = booking_for("r1", "u2", &points[0], &points[2]);
    assert_eq!(booking.ride_id, "r1");
    assert_eq!(booking.passenger_id, "u2");
    assert_eq!(booking.seats_booked, 1);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.pickup_point.label.as_deref(), Some("Starting Point"));
    assert_eq!(booking.drop_point.label.as_deref(), Some("Final Destination"));
}

#[test]
fn booking_for_carries_stop_coordinates() {
    let points = route_points(&ride());
    assert_eq!(points[1].kind, PointKind::Stop);
    let booking = booking_for("r1", "u2", &points[1], &points[2]);
    assert_eq!(booking.pickup_point.latitude, 17.5);
    assert_eq!(booking.pickup_point.longitude, 78.6);
}
