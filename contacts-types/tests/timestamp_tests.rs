use contacts_types::Timestamp;
use proptest::prelude::*;

#[test]
fn positive_millis_make_a_timestamp() {
    let ts = Timestamp::from_millis(1_700_000_000_000).unwrap();
    assert_eq!(ts.millis(), 1_700_000_000_000);
}

#[test]
fn zero_and_negative_millis_are_absent() {
    assert!(Timestamp::from_millis(0).is_none());
    assert!(Timestamp::from_millis(-5).is_none());
}

#[test]
fn try_from_rejects_non_positive() {
    assert!(Timestamp::try_from(0_i64).is_err());
    assert!(Timestamp::try_from(10_i64).is_ok());
}

#[test]
fn converts_to_datetime() {
    let ts = Timestamp::from_millis(86_400_000).unwrap();
    let dt = ts.to_datetime().unwrap();
    assert_eq!(dt.to_rfc3339(), "1970-01-02T00:00:00+00:00");
}

#[test]
fn timestamps_order_by_millis() {
    let a = Timestamp::from_millis(1).unwrap();
    let b = Timestamp::from_millis(2).unwrap();
    assert!(a < b);
}

proptest! {
    #[test]
    fn millis_roundtrip(ms in 1i64..i64::MAX) {
        let ts = Timestamp::from_millis(ms).unwrap();
        prop_assert_eq!(i64::from(ts), ms);
    }
}
