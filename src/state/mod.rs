//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `rides`, `active_ride`, `bookings`) so
//! individual screens can depend on small focused models provided as
//! `RwSignal` contexts.

pub mod active_ride;
pub mod auth;
pub mod bookings;
pub mod rides;
