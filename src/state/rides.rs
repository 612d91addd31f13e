//! Browsable ride-list state for the take-ride screen.
//!
//! DESIGN
//! ======
//! Separating the browse list from active-ride state keeps the booking flow
//! independent of the home screen's gating data.

#[cfg(test)]
#[path = "rides_test.rs"]
mod rides_test;

use crate::net::types::Ride;

/// Active ride offers available for booking, with resolved display
/// addresses keyed by ride id.
#[derive(Clone, Debug)]
pub struct RidesState {
    pub items: Vec<Ride>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for RidesState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}
