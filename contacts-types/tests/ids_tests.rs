use contacts_types::{ContactId, DataId, PROFILE_ID_BASE, RawContactId, is_profile_id};
use std::collections::HashSet;
use std::str::FromStr;

// ── ContactId ─────────────────────────────────────────────────────

#[test]
fn contact_id_value_roundtrip() {
    let id = ContactId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(ContactId::from(42), id);
}

#[test]
fn contact_id_display_and_parse() {
    let id = ContactId::new(1234);
    let parsed = ContactId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn contact_id_parse_trims_whitespace() {
    assert_eq!(ContactId::parse(" 7 ").unwrap(), ContactId::new(7));
}

#[test]
fn contact_id_parse_invalid() {
    assert!(ContactId::parse("seven").is_err());
    assert!(ContactId::from_str("").is_err());
}

#[test]
fn contact_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(ContactId::new(1));
    set.insert(ContactId::new(1));
    set.insert(ContactId::new(2));
    assert_eq!(set.len(), 2);
}

#[test]
fn raw_contact_id_displays_as_integer() {
    let id = RawContactId::new(9);
    assert_eq!(format!("{id}"), "9");
}

// ── Ordering ──────────────────────────────────────────────────────

#[test]
fn raw_contact_ids_sort_ascending() {
    let mut ids = vec![RawContactId::new(3), RawContactId::new(1), RawContactId::new(2)];
    ids.sort();
    assert_eq!(ids, vec![RawContactId::new(1), RawContactId::new(2), RawContactId::new(3)]);
}

// ── Profile ids ───────────────────────────────────────────────────

#[test]
fn regular_ids_are_not_profile() {
    assert!(!ContactId::new(1).is_profile());
    assert!(!DataId::new(PROFILE_ID_BASE - 1).is_profile());
}

#[test]
fn ids_at_or_above_base_are_profile() {
    assert!(is_profile_id(PROFILE_ID_BASE));
    assert!(ContactId::new(PROFILE_ID_BASE).is_profile());
    assert!(RawContactId::new(PROFILE_ID_BASE + 10).is_profile());
}
