//! Booking-list state for the my-rides screen and the driver's passenger
//! list.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::Booking;

/// Bookings visible to the current screen, newest first.
#[derive(Clone, Debug)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
    /// Booking currently being completed, to disable its button.
    pub completing_id: Option<String>,
}

impl Default for BookingsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            completing_id: None,
        }
    }
}
