use contacts_model::{
    BuiltInData, DataEntity, DataKind, DataMeta, Email, Event, EventDate, EventType, ImProtocol,
    Name, Phone, PhoneType, Redactable, RelationType, redact_str,
};
use contacts_types::{ContactId, DataId, RawContactId};
use proptest::prelude::*;

fn meta(id: i64) -> DataMeta {
    DataMeta::new(DataId::new(id), RawContactId::new(2), ContactId::new(1), false, false)
}

fn phone(number: Option<&str>) -> Phone {
    Phone {
        meta: meta(7),
        phone_type: Some(PhoneType::Mobile),
        label: None,
        number: number.map(str::to_owned),
        normalized_number: None,
        is_redacted: false,
    }
}

// ── DataMeta ─────────────────────────────────────────────────────

#[test]
fn super_primary_is_promoted_to_primary() {
    let m = DataMeta::new(DataId::new(1), RawContactId::new(2), ContactId::new(3), false, true);
    assert!(m.is_super_primary());
    assert!(m.is_primary());
}

#[test]
fn primary_without_super_primary_is_kept() {
    let m = DataMeta::new(DataId::new(1), RawContactId::new(2), ContactId::new(3), true, false);
    assert!(m.is_primary());
    assert!(!m.is_super_primary());
    assert_eq!(m.id(), DataId::new(1));
    assert_eq!(m.raw_contact_id(), RawContactId::new(2));
    assert_eq!(m.contact_id(), ContactId::new(3));
}

// ── Type codes ───────────────────────────────────────────────────

#[test]
fn type_codes_decode() {
    assert_eq!(PhoneType::from_value(2), Some(PhoneType::Mobile));
    assert_eq!(PhoneType::from_value(20), Some(PhoneType::Mms));
    assert_eq!(PhoneType::from_value(21), None);
    assert_eq!(EventType::from_value(3), Some(EventType::Birthday));
    assert_eq!(RelationType::from_value(14), Some(RelationType::Spouse));
    assert_eq!(ImProtocol::from_value(-1), Some(ImProtocol::Custom));
    assert_eq!(ImProtocol::Jabber.value(), 7);
}

// ── Event dates ──────────────────────────────────────────────────

#[test]
fn event_date_with_year() {
    let date = EventDate::parse("1990-05-17").unwrap();
    assert_eq!(date, EventDate { year: Some(1990), month: 5, day: 17 });
    assert_eq!(date.to_string(), "1990-05-17");
}

#[test]
fn event_date_with_time_suffix() {
    let date = EventDate::parse("2001-12-31T00:00:00.000Z").unwrap();
    assert_eq!(date.year, Some(2001));
    assert_eq!((date.month, date.day), (12, 31));
}

#[test]
fn event_date_without_year() {
    let date = EventDate::parse("--02-29").unwrap();
    assert_eq!(date, EventDate { year: None, month: 2, day: 29 });
    assert_eq!(date.to_string(), "--02-29");
}

#[test]
fn malformed_event_dates_are_none() {
    for value in ["", "yesterday", "1990-13-01", "--13-01", "--02-30", "1990/05/17"] {
        assert_eq!(EventDate::parse(value), None, "{value}");
    }
}

// ── Blank detection ──────────────────────────────────────────────

#[test]
fn phone_without_number_is_blank() {
    assert!(phone(None).is_blank());
    assert!(phone(Some("  ")).is_blank());
    assert!(!phone(Some("555-0100")).is_blank());
}

#[test]
fn event_is_blank_without_date() {
    let event = Event {
        meta: meta(1),
        event_type: Some(EventType::Birthday),
        label: Some("party".into()),
        date: None,
        is_redacted: false,
    };
    assert!(event.is_blank());
}

#[test]
fn built_in_data_reports_kind_and_meta() {
    let data = BuiltInData::Phone(phone(Some("1")));
    assert_eq!(data.kind(), DataKind::Phone);
    assert_eq!(data.kind(), Phone::KIND);
    assert_eq!(data.meta().id(), DataId::new(7));
    assert!(!data.is_blank());
}

// ── Redaction ────────────────────────────────────────────────────

#[test]
fn redaction_masks_strings_and_keeps_ids() {
    let email = Email {
        meta: meta(3),
        email_type: None,
        label: Some("work".into()),
        address: Some("ann@example.com".into()),
        is_redacted: false,
    };
    let redacted = email.redacted_copy();
    assert!(redacted.is_redacted());
    assert_eq!(redacted.address.as_deref(), Some("***************"));
    assert_eq!(redacted.meta, email.meta);
    assert_eq!(redacted.label, email.label);
}

#[test]
fn redaction_keeps_absent_values_absent() {
    let name = Name {
        meta: meta(4),
        display_name: Some("Ann".into()),
        given_name: None,
        middle_name: None,
        family_name: None,
        prefix: None,
        suffix: None,
        phonetic_given_name: None,
        phonetic_middle_name: None,
        phonetic_family_name: None,
        is_redacted: false,
    };
    let redacted = name.redacted_copy();
    assert_eq!(redacted.display_name.as_deref(), Some("***"));
    assert_eq!(redacted.given_name, None);
}

mod redaction_properties {
    use super::*;

    proptest! {
        #[test]
        fn redaction_preserves_char_count(value in "\\PC{0,40}") {
            let masked = redact_str(&value);
            prop_assert_eq!(masked.chars().count(), value.chars().count());
            prop_assert!(masked.chars().all(|c| c == '*'));
        }
    }
}
