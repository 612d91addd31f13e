use super::*;

#[test]
fn passengers_select_keeps_row_columns_alongside_join() {
    // the Booking DTO needs ride_id/passenger_id even in the projected form
    for column in ["id", "ride_id", "passenger_id", "status", "seats_booked", "created_at"] {
        assert!(PASSENGERS_SELECT.contains(column), "missing {column}");
    }
    assert!(PASSENGERS_SELECT.contains("passenger:passenger_id(id,full_name,email,phone_number)"));
}
