use super::*;
use crate::net::types::RideStatus;

fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint { latitude, longitude }
}

fn ride_with_stops(stops: Vec<GeoPoint>) -> Ride {
    Ride {
        id: "r1".to_owned(),
        driver_id: "u1".to_owned(),
        source: point(17.4, 78.5),
        intermediate_points: stops,
        destination: point(18.0, 79.0),
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
// Region containment
// =============================================================

#[test]
fn point_inside_region_is_accepted() {
    assert!(within_region(point(17.4, 78.5)));
}

#[test]
fn boundary_points_are_accepted() {
    assert!(within_region(point(19.5, 81.5)));
    assert!(within_region(point(16.5, 77.5)));
}

#[test]
fn points_outside_region_are_rejected() {
    assert!(!within_region(point(19.6, 78.5)));
    assert!(!within_region(point(16.4, 78.5)));
    assert!(!within_region(point(17.4, 81.6)));
    assert!(!within_region(point(17.4, 77.4)));
}

// =============================================================
// Route point assembly
// =============================================================

#[test]
fn route_points_orders_start_stops_end() {
    let ride = ride_with_stops(vec![point(17.5, 78.6), point(17.6, 78.7)]);
    let points = route_points(&ride);
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].label, "Starting Point");
    assert_eq!(points[0].kind, PointKind::Start);
    assert_eq!(points[1].label, "Stop 1");
    assert_eq!(points[2].label, "Stop 2");
    assert_eq!(points[3].label, "Final Destination");
    assert_eq!(points[3].kind, PointKind::End);
}

#[test]
fn route_points_without_stops_has_only_endpoints() {
    let points = route_points(&ride_with_stops(vec![]));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].kind, PointKind::Start);
    assert_eq!(points[1].kind, PointKind::End);
}

// =============================================================
// Pickup/drop eligibility
// =============================================================

#[test]
fn destination_cannot_be_pickup() {
    let points = route_points(&ride_with_stops(vec![point(17.5, 78.6)]));
    assert!(points[0].can_pick_up());
    assert!(points[1].can_pick_up());
    assert!(!points[2].can_pick_up());
}

#[test]
fn source_cannot_be_drop() {
    let points = route_points(&ride_with_stops(vec![point(17.5, 78.6)]));
    assert!(!points[0].can_drop());
    assert!(points[1].can_drop());
    assert!(points[2].can_drop());
}

#[test]
fn to_labeled_carries_label_and_coordinates() {
    let points = route_points(&ride_with_stops(vec![]));
    let labeled = points[0].to_labeled();
    assert_eq!(labeled.label.as_deref(), Some("Starting Point"));
    assert_eq!(labeled.latitude, 17.4);
    assert_eq!(labeled.longitude, 78.5);
}
