//! Reusable view components shared across pages.

pub mod booking_card;
pub mod ride_card;
pub mod route_points;
