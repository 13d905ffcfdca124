//! Source-specific row views.
//!
//! Each source stores the contact and raw contact ids under different
//! columns. The capability traits hide that, so code that only needs "a row
//! that knows its contact id" works against any of the three views.

use crate::cursor::Cursor;
use crate::reader::EntityCursor;
use contacts_model::{
    Account, ContactsField, DataContactsField, DataField, DataMeta, DataRawContactsField,
    GenericDataField, Include, RawContactsField,
};
use contacts_types::{ContactId, DataId, RawContactId};

/// A row that can name the contact it belongs to.
pub trait ContactIdCursor {
    fn contact_id(&self) -> Option<ContactId>;
}

/// A row that can also name the raw contact it belongs to.
pub trait RawContactIdCursor: ContactIdCursor {
    fn raw_contact_id(&self) -> Option<RawContactId>;
}

/// A row of the Data source.
#[derive(Clone, Copy)]
pub struct DataCursor<'a> {
    reader: EntityCursor<'a, DataField>,
}

impl<'a> DataCursor<'a> {
    pub fn new(cursor: &'a dyn Cursor, include: &'a Include<DataField>) -> Self {
        Self {
            reader: EntityCursor::new(cursor, include),
        }
    }

    /// The typed field reader for this row.
    #[must_use]
    pub fn reader(&self) -> &EntityCursor<'a, DataField> {
        &self.reader
    }

    #[must_use]
    pub fn include(&self) -> &'a Include<DataField> {
        self.reader.include()
    }

    pub fn data_id(&self) -> Option<DataId> {
        self.reader.id(&GenericDataField::DataId.into())
    }

    /// The raw `mimetype` column value.
    pub fn mime_type(&self) -> Option<String> {
        self.reader.string(&GenericDataField::MimeType.into())
    }

    /// Identity and primary flags, or `None` when an id column is missing.
    pub fn meta(&self) -> Option<DataMeta> {
        Some(DataMeta::new(
            self.data_id()?,
            self.raw_contact_id()?,
            self.contact_id()?,
            self.reader
                .boolean(&GenericDataField::IsPrimary.into())
                .unwrap_or(false),
            self.reader
                .boolean(&GenericDataField::IsSuperPrimary.into())
                .unwrap_or(false),
        ))
    }

    /// The account joined from the RawContacts source. Both name and type
    /// must be present.
    pub fn account(&self) -> Option<Account> {
        Some(Account::new(
            self.reader.string(&DataRawContactsField::AccountName.into())?,
            self.reader.string(&DataRawContactsField::AccountType.into())?,
        ))
    }
}

impl ContactIdCursor for DataCursor<'_> {
    fn contact_id(&self) -> Option<ContactId> {
        self.reader.id(&DataContactsField::Id.into())
    }
}

impl RawContactIdCursor for DataCursor<'_> {
    fn raw_contact_id(&self) -> Option<RawContactId> {
        self.reader.id(&DataRawContactsField::Id.into())
    }
}

/// A row of the Contacts source.
#[derive(Clone, Copy)]
pub struct ContactsCursor<'a> {
    reader: EntityCursor<'a, ContactsField>,
}

impl<'a> ContactsCursor<'a> {
    pub fn new(cursor: &'a dyn Cursor, include: &'a Include<ContactsField>) -> Self {
        Self {
            reader: EntityCursor::new(cursor, include),
        }
    }

    #[must_use]
    pub fn reader(&self) -> &EntityCursor<'a, ContactsField> {
        &self.reader
    }
}

impl ContactIdCursor for ContactsCursor<'_> {
    fn contact_id(&self) -> Option<ContactId> {
        self.reader.id(&ContactsField::Id)
    }
}

/// A row of the RawContacts source.
#[derive(Clone, Copy)]
pub struct RawContactsCursor<'a> {
    reader: EntityCursor<'a, RawContactsField>,
}

impl<'a> RawContactsCursor<'a> {
    pub fn new(cursor: &'a dyn Cursor, include: &'a Include<RawContactsField>) -> Self {
        Self {
            reader: EntityCursor::new(cursor, include),
        }
    }

    #[must_use]
    pub fn reader(&self) -> &EntityCursor<'a, RawContactsField> {
        &self.reader
    }

    pub fn account(&self) -> Option<Account> {
        Some(Account::new(
            self.reader.string(&RawContactsField::AccountName)?,
            self.reader.string(&RawContactsField::AccountType)?,
        ))
    }
}

impl ContactIdCursor for RawContactsCursor<'_> {
    fn contact_id(&self) -> Option<ContactId> {
        self.reader.id(&RawContactsField::ContactId)
    }
}

impl RawContactIdCursor for RawContactsCursor<'_> {
    fn raw_contact_id(&self) -> Option<RawContactId> {
        self.reader.id(&RawContactsField::Id)
    }
}
