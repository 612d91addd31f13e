//! Reverse geocoding for route point display.
//!
//! Failures degrade to a placeholder string so address lookups never take a
//! screen down with them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use super::types::GeoPoint;

/// Shown when no address can be resolved for a coordinate pair.
pub const ADDRESS_UNAVAILABLE: &str = "Address not available";

#[cfg(any(test, feature = "hydrate"))]
fn geocode_url(point: GeoPoint, api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/geocode/json?latlng={},{}&key={api_key}",
        point.latitude, point.longitude
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn first_formatted_address(body: &serde_json::Value) -> Option<String> {
    if body.get("status").and_then(|s| s.as_str()) != Some("OK") {
        return None;
    }
    body.get("results")?
        .as_array()?
        .first()?
        .get("formatted_address")?
        .as_str()
        .map(ToOwned::to_owned)
}

/// Resolve a display address for `point`, falling back to
/// [`ADDRESS_UNAVAILABLE`].
pub async fn address_for(point: GeoPoint) -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(api_key) = option_env!("RIDEPOOL_MAPS_KEY") else {
            return ADDRESS_UNAVAILABLE.to_owned();
        };
        let url = geocode_url(point, api_key);
        let Ok(response) = gloo_net::http::Request::get(&url).send().await else {
            return ADDRESS_UNAVAILABLE.to_owned();
        };
        let Ok(body) = response.json::<serde_json::Value>().await else {
            return ADDRESS_UNAVAILABLE.to_owned();
        };
        first_formatted_address(&body).unwrap_or_else(|| ADDRESS_UNAVAILABLE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = point;
        ADDRESS_UNAVAILABLE.to_owned()
    }
}
