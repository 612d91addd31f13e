use super::*;

fn valid_input() -> RideFormInput {
    RideFormInput {
        vehicle_type_id: "v1".to_owned(),
        available_seats: "3".to_owned(),
        fare: "120.5".to_owned(),
        female_only: false,
        source_lat: "17.40".to_owned(),
        source_lng: "78.50".to_owned(),
        stop1_lat: "17.50".to_owned(),
        stop1_lng: "78.60".to_owned(),
        stop2_lat: "17.60".to_owned(),
        stop2_lng: "78.70".to_owned(),
        dest_lat: "18.00".to_owned(),
        dest_lng: "79.00".to_owned(),
    }
}

// =============================================================
// Coordinate parsing
// =============================================================

#[test]
fn parse_point_accepts_in_region_coordinates() {
    let point = parse_point(" 17.4 ", " 78.5 ").unwrap();
    assert_eq!(point.latitude, 17.4);
    assert_eq!(point.longitude, 78.5);
}

#[test]
fn parse_point_rejects_non_numeric_input() {
    assert_eq!(parse_point("abc", "78.5"), Err("Coordinates must be numbers."));
    assert_eq!(parse_point("17.4", ""), Err("Coordinates must be numbers."));
}

#[test]
fn parse_point_rejects_out_of_region_coordinates() {
    assert_eq!(parse_point("28.6", "77.2"), Err("Choose points within Telangana."));
}

// =============================================================
// Form assembly
// =============================================================

#[test]
fn build_new_ride_assembles_insert_payload() {
    let ride = build_new_ride("u1", &valid_input()).unwrap();
    assert_eq!(ride.driver_id, "u1");
    assert_eq!(ride.vehicle_type_id, "v1");
    assert_eq!(ride.available_seats, 3);
    assert_eq!(ride.fare, 120.5);
    assert_eq!(ride.status, RideStatus::Active);
    assert_eq!(ride.intermediate_points.len(), 2);
    assert_eq!(ride.source.latitude, 17.4);
    assert_eq!(ride.destination.longitude, 79.0);
}

#[test]
fn build_new_ride_requires_vehicle_type() {
    let mut input = valid_input();
    input.vehicle_type_id.clear();
    assert_eq!(build_new_ride("u1", &input), Err("Select a vehicle type.".to_owned()));
}

#[test]
fn build_new_ride_requires_positive_seats() {
    let mut input = valid_input();
    input.available_seats = "0".to_owned();
    assert_eq!(build_new_ride("u1", &input), Err("Enter a valid seat count.".to_owned()));
    input.available_seats = "two".to_owned();
    assert_eq!(build_new_ride("u1", &input), Err("Enter a valid seat count.".to_owned()));
}

#[test]
fn build_new_ride_requires_positive_fare() {
    let mut input = valid_input();
    input.fare = "0".to_owned();
    assert_eq!(build_new_ride("u1", &input), Err("Enter a valid fare amount.".to_owned()));
    input.fare = "-5".to_owned();
    assert_eq!(build_new_ride("u1", &input), Err("Enter a valid fare amount.".to_owned()));
}

#[test]
fn build_new_ride_names_failing_point() {
    let mut input = valid_input();
    input.stop2_lat = "99".to_owned();
    assert_eq!(
        build_new_ride("u1", &input),
        Err("Stop 2: Choose points within Telangana.".to_owned())
    );
}

#[test]
fn build_new_ride_carries_female_only_flag() {
    let mut input = valid_input();
    input.female_only = true;
    assert!(build_new_ride("u1", &input).unwrap().female_only);
}
