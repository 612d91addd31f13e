//! Active-ride detection state shared by home and active-ride screens.
//!
//! A user is "in" a ride either as the driver of an active offer or as the
//! passenger of a live booking; both gate the home screen's give/take
//! actions.

#[cfg(test)]
#[path = "active_ride_test.rs"]
mod active_ride_test;

use crate::net::types::Ride;

/// Which side of the active ride the user is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveRole {
    /// The user posted the ride.
    Driver,
    /// The user booked a seat on the ride.
    Passenger,
}

/// State of the user's current ride, if any.
#[derive(Clone, Debug)]
pub struct ActiveRideState {
    pub ride: Option<Ride>,
    pub role: Option<ActiveRole>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ActiveRideState {
    fn default() -> Self {
        Self {
            ride: None,
            role: None,
            loading: true,
            error: None,
        }
    }
}

impl ActiveRideState {
    /// Whether the user currently has a ride in progress.
    pub fn has_active_ride(&self) -> bool {
        self.ride.is_some()
    }

    /// Whether the user is the driver of the active ride.
    pub fn is_driver(&self) -> bool {
        self.role == Some(ActiveRole::Driver)
    }
}
