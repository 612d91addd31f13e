use super::*;

#[test]
fn date_part_strips_time_component() {
    assert_eq!(date_part("2025-02-11T08:30:00Z"), "2025-02-11");
}

#[test]
fn date_part_passes_through_bare_dates() {
    assert_eq!(date_part("2025-02-11"), "2025-02-11");
    assert_eq!(date_part(""), "");
}

#[test]
fn fare_display_uses_two_decimals() {
    assert_eq!(fare_display(120.5), "Rs. 120.50");
    assert_eq!(fare_display(80.0), "Rs. 80.00");
}

#[test]
fn avatar_initial_takes_first_letter() {
    assert_eq!(avatar_initial("Asha Rao"), 'A');
    assert_eq!(avatar_initial("  ravi"), 'r');
    assert_eq!(avatar_initial(""), 'U');
}
