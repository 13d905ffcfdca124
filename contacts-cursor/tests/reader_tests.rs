use contacts_cursor::{
    ContactIdCursor, ContactsCursor, Cursor, DataCursor, EntityCursor, MemoryCursor,
    RawContactIdCursor, RawContactsCursor, Value,
};
use contacts_model::{
    ContactsField, DataField, Field, Include, NameField, PhoneField, RawContactsField,
};
use contacts_types::{ContactId, RawContactId, Timestamp};
use proptest::prelude::*;

fn contacts_row(values: Vec<(&str, Value)>) -> MemoryCursor {
    let (columns, row): (Vec<_>, Vec<_>) = values.into_iter().unzip();
    let mut cursor = MemoryCursor::new(columns).unwrap().with_row(row).unwrap();
    cursor.move_to_next();
    cursor
}

fn all_contacts_fields() -> Include<ContactsField> {
    Include::new(ContactsField::ALL.iter().copied())
}

// ── Typed reads ──────────────────────────────────────────────────

#[test]
fn boolean_is_true_only_for_one() {
    let cursor = contacts_row(vec![
        ("_id", 1.into()),
        ("starred", 1.into()),
        ("send_to_voicemail", 2.into()),
        ("has_phone_number", 0.into()),
    ]);
    let include = all_contacts_fields();
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(reader.boolean(&ContactsField::Starred), Some(true));
    assert_eq!(reader.boolean(&ContactsField::SendToVoicemail), Some(false));
    assert_eq!(reader.boolean(&ContactsField::HasPhoneNumber), Some(false));
}

#[test]
fn timestamp_requires_positive_millis() {
    let include = all_contacts_fields();
    let cursor = contacts_row(vec![
        ("_id", 1.into()),
        ("contact_last_updated_timestamp", 0.into()),
    ]);
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(reader.timestamp(&ContactsField::LastUpdatedTimestamp), None);

    let cursor =
        contacts_row(vec![("_id", 1.into()), ("contact_last_updated_timestamp", 1000.into())]);
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(
        reader.timestamp(&ContactsField::LastUpdatedTimestamp),
        Timestamp::from_millis(1000)
    );
}

#[test]
fn malformed_values_read_as_none() {
    let include = all_contacts_fields();
    let cursor = contacts_row(vec![("_id", "abc".into()), ("photo_uri", "".into())]);
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(reader.long(&ContactsField::Id), None);
    assert_eq!(reader.uri(&ContactsField::PhotoUri), None);
    assert_eq!(reader.string(&ContactsField::PhotoUri), Some(String::new()));
}

#[test]
fn int_rejects_out_of_range() {
    let include = all_contacts_fields();
    let cursor = contacts_row(vec![("_id", i64::MAX.into())]);
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(reader.int(&ContactsField::Id), None);
    assert_eq!(reader.long(&ContactsField::Id), Some(i64::MAX));
}

#[test]
fn blob_reads_bytes() {
    let include = all_contacts_fields();
    let cursor = contacts_row(vec![("_id", 1.into()), ("lookup", Value::Blob(vec![9, 8]))]);
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(reader.blob(&ContactsField::LookupKey), Some(vec![9, 8]));
    assert_eq!(reader.string(&ContactsField::LookupKey), None);
}

#[test]
fn sql_null_reads_as_none() {
    let include = all_contacts_fields();
    let cursor = contacts_row(vec![("_id", 1.into()), ("display_name", Value::Null)]);
    let reader = EntityCursor::new(&cursor, &include);
    assert_eq!(reader.string(&ContactsField::DisplayNamePrimary), None);
}

// ── Include gating ───────────────────────────────────────────────

#[test]
fn required_fields_are_read_without_being_included() {
    let include = Include::<ContactsField>::required_only();
    let cursor = contacts_row(vec![("_id", 5.into()), ("display_name", "Ann".into())]);
    let view = ContactsCursor::new(&cursor, &include);
    assert_eq!(view.contact_id(), Some(ContactId::new(5)));
    assert_eq!(view.reader().string(&ContactsField::DisplayNamePrimary), None);
}

#[test]
fn shared_generic_columns_are_gated_per_field() {
    let include = Include::new([DataField::from(NameField::DisplayName)]);
    let cursor = contacts_row(vec![("data1", "Ann".into())]);
    let view = DataCursor::new(&cursor, &include);
    let reader = view.reader();
    assert_eq!(reader.string(&NameField::DisplayName.into()), Some("Ann".into()));
    assert_eq!(reader.string(&PhoneField::Number.into()), None);
}

// ── Id capabilities ──────────────────────────────────────────────

fn contact_of(row: &impl ContactIdCursor) -> Option<ContactId> {
    row.contact_id()
}

#[test]
fn each_source_reads_ids_from_its_own_columns() {
    let data_include = Include::<DataField>::required_only();
    let data = contacts_row(vec![("contact_id", 10.into()), ("raw_contact_id", 5.into())]);
    let data_view = DataCursor::new(&data, &data_include);
    assert_eq!(contact_of(&data_view), Some(ContactId::new(10)));
    assert_eq!(data_view.raw_contact_id(), Some(RawContactId::new(5)));

    let raw_include = Include::<RawContactsField>::required_only();
    let raw = contacts_row(vec![("_id", 5.into()), ("contact_id", 10.into())]);
    let raw_view = RawContactsCursor::new(&raw, &raw_include);
    assert_eq!(contact_of(&raw_view), Some(ContactId::new(10)));
    assert_eq!(raw_view.raw_contact_id(), Some(RawContactId::new(5)));

    let contacts_include = Include::<ContactsField>::required_only();
    let contacts = contacts_row(vec![("_id", 10.into())]);
    assert_eq!(
        contact_of(&ContactsCursor::new(&contacts, &contacts_include)),
        Some(ContactId::new(10))
    );
}

mod projection_properties {
    use super::*;

    proptest! {
        #[test]
        fn excluded_fields_read_none_included_fields_read_the_row(
            field_index in 1usize..ContactsField::ALL.len(),
            text in "[a-z]{1,12}",
            include_it in any::<bool>(),
        ) {
            let field = ContactsField::ALL[field_index];
            let cursor = contacts_row(vec![
                ("_id", 1.into()),
                (field.column_name(), text.clone().into()),
            ]);
            let include = if include_it {
                Include::new([field])
            } else {
                Include::required_only()
            };
            let reader = EntityCursor::new(&cursor, &include);
            let expected = include_it.then_some(text);
            prop_assert_eq!(reader.string(&field), expected);
        }
    }
}
