//! Small display-formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// The calendar-date part of an ISO 8601 timestamp, for "booked on" display.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Fare rendered with the currency marker, e.g. `"Rs. 120.50"`.
pub fn fare_display(fare: f64) -> String {
    format!("Rs. {fare:.2}")
}

/// First letter of a name for the avatar badge, `'U'` when empty.
pub fn avatar_initial(name: &str) -> char {
    name.trim().chars().next().unwrap_or('U')
}
