use super::*;

#[test]
fn all_methods_are_distinct_and_ordered() {
    assert_eq!(PaymentMethod::ALL.len(), 3);
    assert_eq!(PaymentMethod::ALL[0], PaymentMethod::Card);
    assert_eq!(PaymentMethod::ALL[2], PaymentMethod::Cash);
}

#[test]
fn labels_are_human_readable() {
    assert_eq!(PaymentMethod::Card.label(), "Credit/Debit Card");
    assert_eq!(PaymentMethod::Upi.label(), "UPI");
    assert_eq!(PaymentMethod::Cash.label(), "Cash");
}
