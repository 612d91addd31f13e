use super::*;

#[test]
fn geocode_url_formats_latlng_pair() {
    let url = geocode_url(GeoPoint { latitude: 17.4, longitude: 78.5 }, "k");
    assert_eq!(
        url,
        "https://maps.googleapis.com/maps/api/geocode/json?latlng=17.4,78.5&key=k"
    );
}

#[test]
fn first_formatted_address_reads_first_result() {
    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {"formatted_address": "Tank Bund Rd, Hyderabad"},
            {"formatted_address": "elsewhere"}
        ]
    });
    assert_eq!(first_formatted_address(&body).as_deref(), Some("Tank Bund Rd, Hyderabad"));
}

#[test]
fn first_formatted_address_rejects_non_ok_status() {
    let body = serde_json::json!({
        "status": "ZERO_RESULTS",
        "results": []
    });
    assert!(first_formatted_address(&body).is_none());
}

#[test]
fn first_formatted_address_handles_empty_results() {
    let body = serde_json::json!({"status": "OK", "results": []});
    assert!(first_formatted_address(&body).is_none());
}
