mod common;

use common::{init_tracing, registry};
use contacts_cursor::MemoryCursor;
use contacts_customdata::{GenderExt, GenderType, HandleNameExt};
use contacts_engine::{AggregatorConfig, RowStreams, aggregate};
use contacts_model::{
    Account, Contact, DataContactsField, DataField, Field, Include, PhoneField,
};
use contacts_registry::CustomDataRegistry;
use contacts_types::{ContactId, DataId, RawContactId};
use pretty_assertions::assert_eq;
use rusqlite::Connection;

const SCHEMA: &str = r"
CREATE TABLE contacts (
    _id INTEGER PRIMARY KEY,
    lookup TEXT,
    display_name TEXT,
    display_name_alt TEXT,
    contact_last_updated_timestamp INTEGER,
    photo_uri TEXT,
    photo_thumb_uri TEXT,
    has_phone_number INTEGER,
    starred INTEGER,
    custom_ringtone TEXT,
    send_to_voicemail INTEGER
);

CREATE TABLE raw_contacts (
    _id INTEGER PRIMARY KEY,
    contact_id INTEGER NOT NULL,
    display_name TEXT,
    display_name_alt TEXT,
    account_name TEXT,
    account_type TEXT,
    sourceid TEXT
);

CREATE TABLE data (
    _id INTEGER PRIMARY KEY,
    raw_contact_id INTEGER NOT NULL,
    mimetype TEXT NOT NULL,
    is_primary INTEGER NOT NULL DEFAULT 0,
    is_super_primary INTEGER NOT NULL DEFAULT 0,
    data1 TEXT, data2 TEXT, data3 TEXT, data4 TEXT, data5 TEXT,
    data6 TEXT, data7 TEXT, data8 TEXT, data9 TEXT, data10 TEXT
);

CREATE VIEW view_data AS
SELECT d._id, d.mimetype, d.is_primary, d.is_super_primary,
       d.raw_contact_id, r.account_name, r.account_type,
       r.contact_id, c.lookup, c.display_name, c.display_name_alt,
       c.contact_last_updated_timestamp, c.photo_uri, c.photo_thumb_uri,
       c.has_phone_number, c.starred, c.custom_ringtone, c.send_to_voicemail,
       d.data1, d.data2, d.data3, d.data4, d.data5,
       d.data6, d.data7, d.data8, d.data9, d.data10
FROM data d
JOIN raw_contacts r ON r._id = d.raw_contact_id
JOIN contacts c ON c._id = r.contact_id;
";

const FIXTURE: &str = r"
INSERT INTO contacts (_id, lookup, display_name, starred) VALUES (1, '0r1', 'Ann Lee', 1);
INSERT INTO contacts (_id, lookup, display_name, starred) VALUES (2, '0r2', 'Bob', 0);

INSERT INTO raw_contacts VALUES (10, 1, 'Ann Lee', NULL, 'ann@example.com', 'com.example', 's10');
INSERT INTO raw_contacts VALUES (11, 1, NULL, NULL, NULL, NULL, NULL);
INSERT INTO raw_contacts VALUES (20, 2, 'Bob', NULL, NULL, NULL, NULL);

INSERT INTO data (_id, raw_contact_id, mimetype, data1)
    VALUES (100, 10, 'vnd.android.cursor.item/name', 'Ann Lee');
INSERT INTO data (_id, raw_contact_id, mimetype, is_primary, is_super_primary, data1, data2)
    VALUES (101, 10, 'vnd.android.cursor.item/phone_v2', 1, 1, '555-0100', '2');
INSERT INTO data (_id, raw_contact_id, mimetype, data1, data2)
    VALUES (102, 11, 'vnd.android.cursor.item/email_v2', 'ann@example.org', '1');
INSERT INTO data (_id, raw_contact_id, mimetype, data1)
    VALUES (103, 11, 'vnd.contacts.customdata.cursor.item/gender', '2');
INSERT INTO data (_id, raw_contact_id, mimetype, data1)
    VALUES (104, 11, 'vnd.contacts.customdata.cursor.item/handlename', '@ann');
INSERT INTO data (_id, raw_contact_id, mimetype, data1)
    VALUES (105, 10, 'vnd.example.cursor.item/unsupported', 'ignored');
";

fn open() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute_batch(FIXTURE).unwrap();
    conn
}

fn select<F: Field>(conn: &Connection, table: &str, include: &Include<F>) -> MemoryCursor {
    let sql = format!(
        "SELECT {} FROM {table} ORDER BY _id",
        include.column_names().join(", ")
    );
    MemoryCursor::from_query(conn, &sql, []).unwrap()
}

fn query(
    conn: &Connection,
    registry: &CustomDataRegistry,
    include: &Include<DataField>,
    config: AggregatorConfig,
) -> Vec<Contact> {
    let mut data = select(conn, "view_data", include);
    let mut contacts = select(conn, "contacts", &include.only_contacts_fields());
    let mut raw_contacts = select(conn, "raw_contacts", &include.only_raw_contacts_fields());
    aggregate(
        registry,
        config,
        include,
        RowStreams {
            data: Some(&mut data),
            contacts: Some(&mut contacts),
            raw_contacts: Some(&mut raw_contacts),
        },
        || false,
    )
}

// ── End to end ───────────────────────────────────────────────────

#[test]
fn aggregates_joined_tables_into_contact_graphs() {
    init_tracing();
    let conn = open();
    let registry = registry();
    let include = registry.include_all_fields();

    let contacts = query(&conn, &registry, &include, AggregatorConfig::default());

    let ids: Vec<_> = contacts.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ContactId::new(1), ContactId::new(2)]);

    let ann = &contacts[0];
    assert_eq!(ann.display_name_primary.as_deref(), Some("Ann Lee"));
    assert_eq!(ann.lookup_key.as_deref(), Some("0r1"));
    assert_eq!(ann.options.as_ref().and_then(|o| o.starred), Some(true));
    let raw_ids: Vec<_> = ann.raw_contacts.iter().map(|r| r.id).collect();
    assert_eq!(raw_ids, vec![RawContactId::new(10), RawContactId::new(11)]);

    let synced = &ann.raw_contacts[0];
    assert_eq!(synced.account, Some(Account::new("ann@example.com", "com.example")));
    assert_eq!(
        synced.name.as_ref().and_then(|n| n.display_name.as_deref()),
        Some("Ann Lee")
    );
    assert_eq!(synced.phones.len(), 1);
    assert_eq!(synced.phones[0].number.as_deref(), Some("555-0100"));
    assert!(synced.phones[0].meta.is_super_primary());
    assert!(synced.custom_data.is_empty());

    let local = &ann.raw_contacts[1];
    assert_eq!(local.account, None);
    assert_eq!(local.emails.len(), 1);
    assert_eq!(local.emails[0].address.as_deref(), Some("ann@example.org"));
    let gender = local.gender(&registry).unwrap().unwrap();
    assert_eq!(gender.gender_type, Some(GenderType::Female));
    let handles = local.handle_names(&registry).unwrap();
    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].handle.as_deref(), Some("@ann"));

    let bob = &contacts[1];
    assert_eq!(bob.display_name_primary.as_deref(), Some("Bob"));
    assert_eq!(bob.raw_contacts.len(), 1);
    let blank = &bob.raw_contacts[0];
    assert_eq!(blank.id, RawContactId::new(20));
    assert!(blank.is_blank());
    assert_eq!(blank.display_name_primary.as_deref(), Some("Bob"));
}

#[test]
fn narrow_projection_leaves_unfetched_values_unset() {
    let conn = open();
    let registry = registry();
    let include: Include<DataField> = Include::new([
        DataField::from(PhoneField::Number),
        DataField::from(DataContactsField::DisplayNamePrimary),
    ]);

    let contacts = query(&conn, &registry, &include, AggregatorConfig::default());
    let ann = &contacts[0];
    assert_eq!(ann.display_name_primary.as_deref(), Some("Ann Lee"));
    assert_eq!(ann.lookup_key, None);
    assert_eq!(ann.options, None);

    let synced = &ann.raw_contacts[0];
    assert_eq!(synced.account, None);
    assert_eq!(synced.phones[0].number.as_deref(), Some("555-0100"));
    assert_eq!(synced.phones[0].phone_type, None);
    assert_eq!(synced.name, None);

    let local = &ann.raw_contacts[1];
    assert!(local.emails.is_empty());
    assert_eq!(local.gender(&registry).unwrap(), None);
}

#[test]
fn redacting_config_hides_personal_values() {
    let conn = open();
    let registry = registry();
    let include = registry.include_all_fields();
    let config = AggregatorConfig {
        redact: true,
        ..AggregatorConfig::default()
    };

    let contacts = query(&conn, &registry, &include, config);
    assert!(contacts.iter().all(|c| c.is_redacted));

    let synced = &contacts[0].raw_contacts[0];
    assert_ne!(synced.phones[0].number.as_deref(), Some("555-0100"));
    assert_eq!(synced.phones[0].meta.id(), DataId::new(101));
}
