//! Service-region bounds and route point assembly.
//!
//! DESIGN
//! ======
//! The service operates inside Telangana; ride coordinates outside the
//! bounding box are rejected at entry. A ride's route flattens to an ordered
//! point list (start, stops, end) that both the booking picker and the
//! active-ride view render.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use crate::net::types::{GeoPoint, LabeledPoint, Ride};

/// Latitude/longitude bounding box of the service region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Telangana service area.
pub const REGION_BOUNDS: RegionBounds = RegionBounds {
    north: 19.5,
    south: 16.5,
    east: 81.5,
    west: 77.5,
};

/// Whether a coordinate pair falls inside the service region.
pub fn within_region(point: GeoPoint) -> bool {
    point.latitude >= REGION_BOUNDS.south
        && point.latitude <= REGION_BOUNDS.north
        && point.longitude >= REGION_BOUNDS.west
        && point.longitude <= REGION_BOUNDS.east
}

/// Position of a point along a ride's route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
    /// The ride's source.
    Start,
    /// An intermediate stop.
    Stop,
    /// The ride's destination.
    End,
}

/// One selectable point along a ride's route.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePoint {
    pub point: GeoPoint,
    pub label: String,
    pub kind: PointKind,
}

impl RoutePoint {
    /// Passengers cannot board at the final destination.
    pub fn can_pick_up(&self) -> bool {
        self.kind != PointKind::End
    }

    /// Passengers cannot leave at the starting point.
    pub fn can_drop(&self) -> bool {
        self.kind != PointKind::Start
    }

    /// The labeled coordinate stored on a booking for this point.
    pub fn to_labeled(&self) -> LabeledPoint {
        LabeledPoint::new(self.point, self.label.clone())
    }
}

/// Flatten a ride's route into display order: start, stops, end.
pub fn route_points(ride: &Ride) -> Vec<RoutePoint> {
    let mut points = Vec::with_capacity(ride.intermediate_points.len() + 2);
    points.push(RoutePoint {
        point: ride.source,
        label: "Starting Point".to_owned(),
        kind: PointKind::Start,
    });
    for (index, point) in ride.intermediate_points.iter().enumerate() {
        points.push(RoutePoint {
            point: *point,
            label: format!("Stop {}", index + 1),
            kind: PointKind::Stop,
        });
    }
    points.push(RoutePoint {
        point: ride.destination,
        label: "Final Destination".to_owned(),
        kind: PointKind::End,
    });
    points
}
