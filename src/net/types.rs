//! Wire DTOs for the remote REST table store.
//!
//! DESIGN
//! ======
//! These types mirror remote table rows one-to-one so serde round-trips stay
//! lossless. Embedded-join fields (`drivers`, `vehicle_types`, `ride`,
//! `passenger`) are optional and only populated when the select string asks
//! the server for them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A geographic coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A coordinate pair with an optional display label.
///
/// Booking pickup/drop points carry the label of the route point the
/// passenger chose so screens can show "Stop 1" instead of raw coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Display label, if the point came from a named route stop.
    #[serde(default)]
    pub label: Option<String>,
}

impl LabeledPoint {
    /// Build a labeled point from a coordinate pair.
    pub fn new(point: GeoPoint, label: impl Into<String>) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            label: Some(label.into()),
        }
    }
}

/// Rider gender as stored in the `users` table (capitalized on the wire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Lifecycle status of a ride offer (lowercase on the wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Lifecycle status of a booking (lowercase on the wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A user profile row from the `users` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string, shared with the auth service).
    pub id: String,
    /// Sign-in email, stored lowercase.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Rider gender, used for female-only ride gating server-side.
    pub gender: Gender,
    /// Count of rides this user has offered as a driver.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub rides_given: i64,
    /// Count of rides this user has taken as a passenger.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub rides_taken: i64,
    /// Row creation timestamp (ISO 8601 string).
    #[serde(default)]
    pub created_at: String,
}

/// A vehicle category row from the `vehicle_types` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Display name (e.g. `"Sedan"`).
    pub name: String,
    /// Seat capacity for this category.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_seats: i64,
}

/// Driver fields embedded into a ride via `drivers:driver_id(full_name)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideDriver {
    /// Driver display name.
    pub full_name: String,
}

/// A ride offer row from the `rides` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    /// Unique identifier (UUID string).
    pub id: String,
    /// User who posted the offer.
    pub driver_id: String,
    /// Trip starting point.
    pub source: GeoPoint,
    /// Optional stops between source and destination, in travel order.
    #[serde(default)]
    pub intermediate_points: Vec<GeoPoint>,
    /// Trip end point.
    pub destination: GeoPoint,
    /// Vehicle category reference.
    pub vehicle_type_id: String,
    /// Seats still offered on this ride.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub available_seats: i64,
    /// Fare per passenger.
    pub fare: f64,
    /// Whether the ride is restricted to female passengers.
    #[serde(default)]
    pub female_only: bool,
    /// Lifecycle status.
    pub status: RideStatus,
    /// Row creation timestamp (ISO 8601 string).
    #[serde(default)]
    pub created_at: String,
    /// Embedded driver info when the select string joins `drivers`.
    #[serde(default, rename = "drivers")]
    pub driver: Option<RideDriver>,
    /// Embedded vehicle type when the select string joins `vehicle_types`.
    #[serde(default, rename = "vehicle_types")]
    pub vehicle_type: Option<VehicleType>,
}

/// Passenger contact fields embedded into a booking via
/// `passenger:passenger_id(id,full_name,email,phone_number)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassengerContact {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

/// A reservation row from the `bookings` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Ride this booking reserves seats on.
    pub ride_id: String,
    /// User who made the reservation.
    pub passenger_id: String,
    /// Where the passenger joins the ride.
    #[serde(default)]
    pub pickup_point: Option<LabeledPoint>,
    /// Where the passenger leaves the ride.
    #[serde(default)]
    pub drop_point: Option<LabeledPoint>,
    /// Seats reserved by this booking.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub seats_booked: i64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Row creation timestamp (ISO 8601 string).
    #[serde(default)]
    pub created_at: String,
    /// Embedded ride when the select string joins `ride:ride_id(...)`.
    #[serde(default)]
    pub ride: Option<Ride>,
    /// Embedded passenger contact when the select string joins `passenger`.
    #[serde(default)]
    pub passenger: Option<PassengerContact>,
}

/// Insert payload for a new ride offer; ids and timestamps are
/// server-assigned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRide {
    pub driver_id: String,
    pub source: GeoPoint,
    pub intermediate_points: Vec<GeoPoint>,
    pub destination: GeoPoint,
    pub vehicle_type_id: String,
    pub available_seats: i64,
    pub fare: f64,
    pub female_only: bool,
    pub status: RideStatus,
}

/// Insert payload for a new booking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBooking {
    pub ride_id: String,
    pub passenger_id: String,
    pub pickup_point: LabeledPoint,
    pub drop_point: LabeledPoint,
    pub seats_booked: i64,
    pub status: BookingStatus,
}

/// Insert payload for a first-login profile row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub gender: Gender,
}

/// The auth-service view of a user, returned by token and user endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email, if the auth service exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

/// An access-token session as issued by the auth service and cached in
/// browser storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to authenticated requests.
    pub access_token: String,
    /// Token type, usually `"bearer"`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the access token expires.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Token used to mint a replacement session.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Auth-service user attached to the session, when echoed back.
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Profile fields parked in storage between signup and first sign-in.
///
/// The table row cannot be written until the email is verified and a real
/// session exists, so signup stashes these and the first sign-in replays
/// them as a `users` insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingProfile {
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub gender: Gender,
}

/// Deserialize a count column that some servers emit as a float (`3.0`).
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
