use super::*;

fn config() -> StoreConfig {
    StoreConfig {
        base_url: "https://store.example.co".to_owned(),
        anon_key: "anon-key".to_owned(),
    }
}

// =============================================================
// Filter rendering
// =============================================================

#[test]
fn eq_filter_renders_postgrest_syntax() {
    let filter = Filter::Eq("status".to_owned(), "active".to_owned());
    assert_eq!(filter.render(), "status=eq.active");
}

#[test]
fn in_filter_renders_parenthesized_list() {
    let filter = Filter::In("status".to_owned(), vec!["pending".to_owned(), "confirmed".to_owned()]);
    assert_eq!(filter.render(), "status=in.(pending,confirmed)");
}

// =============================================================
// Select URL building
// =============================================================

#[test]
fn select_url_with_no_filters() {
    let url = select_url(&config(), "vehicle_types", "*", &[], None, None);
    assert_eq!(url, "https://store.example.co/rest/v1/vehicle_types?select=*");
}

#[test]
fn select_url_appends_filters_in_order() {
    let filters = vec![
        Filter::Eq("driver_id".to_owned(), "u1".to_owned()),
        Filter::Eq("status".to_owned(), "active".to_owned()),
    ];
    let url = select_url(&config(), "rides", "*", &filters, None, None);
    assert_eq!(
        url,
        "https://store.example.co/rest/v1/rides?select=*&driver_id=eq.u1&status=eq.active"
    );
}

#[test]
fn select_url_passes_embedded_join_columns_verbatim() {
    let url = select_url(
        &config(),
        "rides",
        "*,drivers:driver_id(full_name),vehicle_types(*)",
        &[Filter::Eq("status".to_owned(), "active".to_owned())],
        None,
        None,
    );
    assert_eq!(
        url,
        "https://store.example.co/rest/v1/rides?select=*,drivers:driver_id(full_name),vehicle_types(*)&status=eq.active"
    );
}

#[test]
fn select_url_with_order_and_limit() {
    let filters = vec![Filter::Eq("passenger_id".to_owned(), "u2".to_owned())];
    let url = select_url(&config(), "bookings", "*", &filters, Some("created_at"), Some(1));
    assert_eq!(
        url,
        "https://store.example.co/rest/v1/bookings?select=*&passenger_id=eq.u2&order=created_at.desc&limit=1"
    );
}

// =============================================================
// Mutation URL building
// =============================================================

#[test]
fn mutation_url_joins_filters_without_select() {
    let filters = vec![Filter::Eq("id".to_owned(), "b1".to_owned())];
    let url = mutation_url(&config(), "bookings", &filters);
    assert_eq!(url, "https://store.example.co/rest/v1/bookings?id=eq.b1");
}

#[test]
fn mutation_url_with_multiple_filters() {
    let filters = vec![
        Filter::Eq("ride_id".to_owned(), "r1".to_owned()),
        Filter::Eq("status".to_owned(), "pending".to_owned()),
    ];
    let url = mutation_url(&config(), "bookings", &filters);
    assert_eq!(
        url,
        "https://store.example.co/rest/v1/bookings?ride_id=eq.r1&status=eq.pending"
    );
}

// =============================================================
// Query builder chaining
// =============================================================

#[test]
fn select_query_accumulates_chained_filters() {
    let store = Store::new(config());
    let query = store
        .table("rides")
        .select("*")
        .eq("driver_id", "u1")
        .eq("status", "active");
    assert_eq!(query.filters.len(), 2);
    assert_eq!(query.filters[0], Filter::Eq("driver_id".to_owned(), "u1".to_owned()));
}

#[test]
fn select_query_in_list_owns_values() {
    let store = Store::new(config());
    let query = store
        .table("bookings")
        .select("*")
        .in_list("status", &["pending", "confirmed"]);
    assert_eq!(
        query.filters[0],
        Filter::In("status".to_owned(), vec!["pending".to_owned(), "confirmed".to_owned()])
    );
}

#[test]
fn mutation_query_accumulates_filters() {
    let store = Store::new(config());
    let query = store.table("bookings").delete().eq("ride_id", "r1");
    assert_eq!(query.filters, vec![Filter::Eq("ride_id".to_owned(), "r1".to_owned())]);
}

// =============================================================
// Headers
// =============================================================

#[test]
fn headers_without_session_skip_authorization() {
    let headers = request_headers(&config(), None, Prefer::Representation);
    assert!(headers.iter().any(|(n, v)| *n == "apikey" && v == "anon-key"));
    assert!(headers.iter().any(|(n, v)| *n == "Prefer" && v == "return=representation"));
    assert!(!headers.iter().any(|(n, _)| *n == "Authorization"));
}

#[test]
fn headers_with_session_attach_bearer_token() {
    let headers = request_headers(&config(), Some("user-token".to_owned()), Prefer::Minimal);
    assert!(headers.iter().any(|(n, v)| *n == "Authorization" && v == "Bearer user-token"));
    assert!(headers.iter().any(|(n, v)| *n == "Prefer" && v == "return=minimal"));
}

#[test]
fn headers_ignore_token_equal_to_anon_key() {
    let headers = request_headers(&config(), Some("anon-key".to_owned()), Prefer::Representation);
    assert!(!headers.iter().any(|(n, _)| *n == "Authorization"));
}

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn error_message_prefers_top_level_message() {
    assert_eq!(error_message(400, r#"{"message": "bad filter"}"#), "bad filter");
}

#[test]
fn error_message_reads_error_description() {
    assert_eq!(
        error_message(401, r#"{"error_description": "Invalid login credentials"}"#),
        "Invalid login credentials"
    );
}

#[test]
fn error_message_reads_nested_error_message() {
    assert_eq!(
        error_message(403, r#"{"error": {"message": "permission denied"}}"#),
        "permission denied"
    );
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(error_message(502, ""), "request failed: 502");
}
