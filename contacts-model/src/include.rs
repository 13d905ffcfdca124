//! Include sets: the fields a caller opted into.
//!
//! An include set doubles as the projection handed to the row source and as
//! the gate readers consult before trusting a value. A field outside the set
//! reads as `None` even when the row stores something for it; callers rely on
//! that to tell "not fetched" apart from "fetched", so writes never clobber
//! data that was simply not read.

use crate::fields::{
    ContactsField, CustomDataField, DataContactsField, DataField, DataRawContactsField, Field,
    RawContactsField,
};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A deduplicated set of fields, always including the required ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include<F: Field> {
    fields: HashSet<F>,
}

impl<F: Field> Include<F> {
    /// Builds an include set from `fields`, unioned with the required fields.
    pub fn new(fields: impl IntoIterator<Item = F>) -> Self {
        let mut set: HashSet<F> = fields.into_iter().collect();
        set.extend(F::required_fields());
        Self { fields: set }
    }

    /// An include set holding only the required fields.
    #[must_use]
    pub fn required_only() -> Self {
        Self::new(std::iter::empty())
    }

    /// Typed membership. Two fields that share a column are still distinct.
    #[must_use]
    pub fn contains(&self, field: &F) -> bool {
        self.fields.contains(field)
    }

    /// True when the field may be read: it is included or required.
    #[must_use]
    pub fn allows(&self, field: &F) -> bool {
        field.required() || self.fields.contains(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The sorted, deduplicated column names to use as a projection.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.column_name().to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fields in both sets (required fields are always kept).
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(self.fields.intersection(&other.fields).cloned())
    }
}

impl<F: Field> Default for Include<F> {
    fn default() -> Self {
        Self::required_only()
    }
}

impl<F: Field> FromIterator<F> for Include<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<F: Field> fmt::Display for Include<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Include [{}]", self.column_names().join(", "))
    }
}

impl Include<DataField> {
    /// Every built-in Data field plus the given custom fields.
    pub fn all_data_fields(custom: impl IntoIterator<Item = CustomDataField>) -> Self {
        Self::new(
            DataField::all()
                .into_iter()
                .chain(custom.into_iter().map(DataField::from)),
        )
    }

    /// True when at least one field carries actual data, as opposed to ids and
    /// joined Contacts/RawContacts columns. A Data query without one is
    /// pointless.
    #[must_use]
    pub fn contains_at_least_one_data_field(&self) -> bool {
        self.fields.iter().any(DataField::is_data)
    }

    /// The custom fields owned by `mime_type`.
    pub fn custom_fields_of<'a>(
        &'a self,
        mime_type: &'a str,
    ) -> impl Iterator<Item = &'a CustomDataField> + 'a {
        self.fields.iter().filter_map(move |field| match field {
            DataField::Custom(custom) if custom.mime_type() == mime_type => Some(custom),
            _ => None,
        })
    }

    /// Projects onto the Contacts source. The contact id column is `contact_id`
    /// on Data rows but `_id` on Contacts rows.
    #[must_use]
    pub fn only_contacts_fields(&self) -> Include<ContactsField> {
        self.fields
            .iter()
            .filter_map(|field| match field {
                DataField::Contact(contact) => Some(match contact {
                    DataContactsField::Id => ContactsField::Id,
                    DataContactsField::LookupKey => ContactsField::LookupKey,
                    DataContactsField::DisplayNamePrimary => ContactsField::DisplayNamePrimary,
                    DataContactsField::DisplayNameAlt => ContactsField::DisplayNameAlt,
                    DataContactsField::LastUpdatedTimestamp => ContactsField::LastUpdatedTimestamp,
                    DataContactsField::PhotoUri => ContactsField::PhotoUri,
                    DataContactsField::PhotoThumbnailUri => ContactsField::PhotoThumbnailUri,
                    DataContactsField::HasPhoneNumber => ContactsField::HasPhoneNumber,
                    DataContactsField::Starred => ContactsField::Starred,
                    DataContactsField::CustomRingtone => ContactsField::CustomRingtone,
                    DataContactsField::SendToVoicemail => ContactsField::SendToVoicemail,
                }),
                _ => None,
            })
            .collect()
    }

    /// Projects onto the RawContacts source. The raw contact id column is
    /// `raw_contact_id` on Data rows but `_id` on RawContacts rows.
    #[must_use]
    pub fn only_raw_contacts_fields(&self) -> Include<RawContactsField> {
        self.fields
            .iter()
            .filter_map(|field| match field {
                DataField::RawContact(DataRawContactsField::Id) => Some(RawContactsField::Id),
                DataField::RawContact(DataRawContactsField::AccountName) => {
                    Some(RawContactsField::AccountName)
                }
                DataField::RawContact(DataRawContactsField::AccountType) => {
                    Some(RawContactsField::AccountType)
                }
                DataField::Contact(DataContactsField::Id) => Some(RawContactsField::ContactId),
                DataField::Contact(DataContactsField::DisplayNamePrimary) => {
                    Some(RawContactsField::DisplayNamePrimary)
                }
                DataField::Contact(DataContactsField::DisplayNameAlt) => {
                    Some(RawContactsField::DisplayNameAlt)
                }
                _ => None,
            })
            .collect()
    }
}
