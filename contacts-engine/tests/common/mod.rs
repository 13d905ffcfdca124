//! Shared test helpers for engine tests.

#![allow(dead_code)]

use contacts_cursor::{MemoryCursor, Value};
use contacts_customdata::CustomDataRegistration;
use contacts_registry::CustomDataRegistry;
use tracing_subscriber::EnvFilter;

pub const DATA_COLUMNS: [&str; 18] = [
    "_id",
    "mimetype",
    "is_primary",
    "is_super_primary",
    "contact_id",
    "raw_contact_id",
    "account_name",
    "account_type",
    "data1",
    "data2",
    "data3",
    "data4",
    "data5",
    "data6",
    "data7",
    "data8",
    "data9",
    "data10",
];

/// Installs a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A registry with the gender and handle name kinds.
pub fn registry() -> CustomDataRegistry {
    let registry = CustomDataRegistry::new();
    registry.register_all(&CustomDataRegistration).unwrap();
    registry
}

/// One Data row. Unset data columns are NULL.
#[derive(Debug, Clone)]
pub struct DataRow {
    pub id: i64,
    pub mime_type: String,
    pub is_primary: bool,
    pub is_super_primary: bool,
    pub contact_id: i64,
    pub raw_contact_id: i64,
    pub data: Vec<Value>,
}

impl DataRow {
    pub fn new(id: i64, contact_id: i64, raw_contact_id: i64, mime_type: &str) -> Self {
        Self {
            id,
            mime_type: mime_type.to_owned(),
            is_primary: false,
            is_super_primary: false,
            contact_id,
            raw_contact_id,
            data: Vec::new(),
        }
    }

    /// Sets `data1`, `data2`, ... in order.
    pub fn with_data<const N: usize>(mut self, data: [Value; N]) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_flags(mut self, is_primary: bool, is_super_primary: bool) -> Self {
        self.is_primary = is_primary;
        self.is_super_primary = is_super_primary;
        self
    }

    fn values(&self) -> Vec<Value> {
        let mut values = vec![
            self.id.into(),
            self.mime_type.as_str().into(),
            self.is_primary.into(),
            self.is_super_primary.into(),
            self.contact_id.into(),
            self.raw_contact_id.into(),
            "ann@example.com".into(),
            "com.example".into(),
        ];
        let mut data = self.data.clone();
        data.resize(10, Value::Null);
        values.extend(data);
        values
    }
}

pub fn data_cursor(rows: &[DataRow]) -> MemoryCursor {
    let mut cursor = MemoryCursor::new(DATA_COLUMNS).unwrap();
    for row in rows {
        cursor.push_row(row.values()).unwrap();
    }
    cursor
}

/// Contacts rows of `(id, display_name)`.
pub fn contacts_cursor(rows: &[(i64, &str)]) -> MemoryCursor {
    let mut cursor = MemoryCursor::new(["_id", "display_name", "starred"]).unwrap();
    for (id, name) in rows {
        cursor
            .push_row(vec![(*id).into(), (*name).into(), 0.into()])
            .unwrap();
    }
    cursor
}

/// RawContacts rows of `(id, contact_id, display_name)`.
pub fn raw_contacts_cursor(rows: &[(i64, i64, Option<&str>)]) -> MemoryCursor {
    let mut cursor = MemoryCursor::new([
        "_id",
        "contact_id",
        "display_name",
        "account_name",
        "account_type",
    ])
    .unwrap();
    for (id, contact_id, name) in rows {
        cursor
            .push_row(vec![
                (*id).into(),
                (*contact_id).into(),
                (*name).into(),
                Value::Null,
                Value::Null,
            ])
            .unwrap();
    }
    cursor
}
