//! Typed fields of the three row sources.
//!
//! A field names one column of one source. Data fields are typed per kind
//! because the Data source reuses generic columns (`data1`, `data2`, ...)
//! across kinds: [`NameField::DisplayName`] and [`PhoneField::Number`] both
//! live in `data1` but are different fields, and including one must not
//! expose the other.

use crate::mime_type::DataKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A column of a row source.
pub trait Field: Clone + Eq + Hash + fmt::Debug {
    /// The column name in the source's projection.
    fn column_name(&self) -> &str;

    /// Required fields are always read, regardless of the include set.
    fn required(&self) -> bool;

    /// The fields every include set of this type implicitly contains.
    fn required_fields() -> Vec<Self>;
}

macro_rules! field_set {
    (
        $(#[$meta:meta])*
        $name:ident => $wrap:ident { $($variant:ident => $column:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every field of this set.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The column holding this field.
            #[must_use]
            pub const fn column_name(self) -> &'static str {
                match self {
                    $($name::$variant => $column),+
                }
            }
        }

        impl From<$name> for DataField {
            fn from(field: $name) -> Self {
                DataField::$wrap(field)
            }
        }
    };
}

field_set!(
    /// Identity and discriminator columns of every Data row. All required.
    GenericDataField => Generic {
        DataId => "_id",
        MimeType => "mimetype",
        IsPrimary => "is_primary",
        IsSuperPrimary => "is_super_primary",
    }
);

field_set!(
    /// Contacts columns joined into Data rows.
    DataContactsField => Contact {
        Id => "contact_id",
        LookupKey => "lookup",
        DisplayNamePrimary => "display_name",
        DisplayNameAlt => "display_name_alt",
        LastUpdatedTimestamp => "contact_last_updated_timestamp",
        PhotoUri => "photo_uri",
        PhotoThumbnailUri => "photo_thumb_uri",
        HasPhoneNumber => "has_phone_number",
        Starred => "starred",
        CustomRingtone => "custom_ringtone",
        SendToVoicemail => "send_to_voicemail",
    }
);

field_set!(
    /// RawContacts columns joined into Data rows.
    DataRawContactsField => RawContact {
        Id => "raw_contact_id",
        AccountName => "account_name",
        AccountType => "account_type",
    }
);

field_set!(
    AddressField => Address {
        FormattedAddress => "data1",
        Type => "data2",
        Label => "data3",
        Street => "data4",
        PoBox => "data5",
        Neighborhood => "data6",
        City => "data7",
        Region => "data8",
        PostCode => "data9",
        Country => "data10",
    }
);

field_set!(
    EmailField => Email {
        Address => "data1",
        Type => "data2",
        Label => "data3",
    }
);

field_set!(
    EventField => Event {
        Date => "data1",
        Type => "data2",
        Label => "data3",
    }
);

field_set!(
    GroupMembershipField => GroupMembership {
        GroupId => "data1",
    }
);

field_set!(
    ImField => Im {
        Data => "data1",
        Protocol => "data5",
        CustomProtocol => "data6",
    }
);

field_set!(
    NameField => Name {
        DisplayName => "data1",
        GivenName => "data2",
        FamilyName => "data3",
        Prefix => "data4",
        MiddleName => "data5",
        Suffix => "data6",
        PhoneticGivenName => "data7",
        PhoneticMiddleName => "data8",
        PhoneticFamilyName => "data9",
    }
);

field_set!(
    NicknameField => Nickname {
        Name => "data1",
    }
);

field_set!(
    NoteField => Note {
        Note => "data1",
    }
);

field_set!(
    OrganizationField => Organization {
        Company => "data1",
        Title => "data4",
        Department => "data5",
        JobDescription => "data6",
        Symbol => "data7",
        PhoneticName => "data8",
        OfficeLocation => "data9",
    }
);

field_set!(
    PhoneField => Phone {
        Number => "data1",
        Type => "data2",
        Label => "data3",
        NormalizedNumber => "data4",
    }
);

field_set!(
    RelationField => Relation {
        Name => "data1",
        Type => "data2",
        Label => "data3",
    }
);

field_set!(
    SipAddressField => SipAddress {
        SipAddress => "data1",
    }
);

field_set!(
    WebsiteField => Website {
        Url => "data1",
    }
);

/// A column of a custom data kind. Custom fields are owned by exactly one
/// mime type; two custom kinds may share a column name without sharing a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomDataField {
    mime_type: String,
    column_name: String,
}

impl CustomDataField {
    pub fn new(mime_type: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            column_name: column_name.into(),
        }
    }

    /// The mime type that owns this field.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}

/// A field of the Data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "set", content = "field", rename_all = "snake_case")]
pub enum DataField {
    Generic(GenericDataField),
    Contact(DataContactsField),
    RawContact(DataRawContactsField),
    Address(AddressField),
    Email(EmailField),
    Event(EventField),
    GroupMembership(GroupMembershipField),
    Im(ImField),
    Name(NameField),
    Nickname(NicknameField),
    Note(NoteField),
    Organization(OrganizationField),
    Phone(PhoneField),
    Relation(RelationField),
    SipAddress(SipAddressField),
    Website(WebsiteField),
    Custom(CustomDataField),
}

impl DataField {
    /// The built-in kind this field belongs to, if it is a built-in data field.
    #[must_use]
    pub fn kind(&self) -> Option<DataKind> {
        match self {
            DataField::Address(_) => Some(DataKind::Address),
            DataField::Email(_) => Some(DataKind::Email),
            DataField::Event(_) => Some(DataKind::Event),
            DataField::GroupMembership(_) => Some(DataKind::GroupMembership),
            DataField::Im(_) => Some(DataKind::Im),
            DataField::Name(_) => Some(DataKind::Name),
            DataField::Nickname(_) => Some(DataKind::Nickname),
            DataField::Note(_) => Some(DataKind::Note),
            DataField::Organization(_) => Some(DataKind::Organization),
            DataField::Phone(_) => Some(DataKind::Phone),
            DataField::Relation(_) => Some(DataKind::Relation),
            DataField::SipAddress(_) => Some(DataKind::SipAddress),
            DataField::Website(_) => Some(DataKind::Website),
            DataField::Generic(_)
            | DataField::Contact(_)
            | DataField::RawContact(_)
            | DataField::Custom(_) => None,
        }
    }

    /// True for fields that carry actual contact data (built-in or custom),
    /// as opposed to identity or joined Contacts/RawContacts columns.
    #[must_use]
    pub fn is_data(&self) -> bool {
        self.kind().is_some() || matches!(self, DataField::Custom(_))
    }

    /// Every built-in field of the Data source, excluding custom fields.
    #[must_use]
    pub fn all() -> Vec<DataField> {
        let mut fields: Vec<DataField> = GenericDataField::ALL
            .iter()
            .copied()
            .map(Into::into)
            .chain(DataContactsField::ALL.iter().copied().map(Into::into))
            .chain(DataRawContactsField::ALL.iter().copied().map(Into::into))
            .collect();
        for kind in DataKind::ALL {
            fields.extend(kind.fields());
        }
        fields
    }
}

impl From<CustomDataField> for DataField {
    fn from(field: CustomDataField) -> Self {
        DataField::Custom(field)
    }
}

impl Field for DataField {
    fn column_name(&self) -> &str {
        match self {
            DataField::Generic(f) => f.column_name(),
            DataField::Contact(f) => f.column_name(),
            DataField::RawContact(f) => f.column_name(),
            DataField::Address(f) => f.column_name(),
            DataField::Email(f) => f.column_name(),
            DataField::Event(f) => f.column_name(),
            DataField::GroupMembership(f) => f.column_name(),
            DataField::Im(f) => f.column_name(),
            DataField::Name(f) => f.column_name(),
            DataField::Nickname(f) => f.column_name(),
            DataField::Note(f) => f.column_name(),
            DataField::Organization(f) => f.column_name(),
            DataField::Phone(f) => f.column_name(),
            DataField::Relation(f) => f.column_name(),
            DataField::SipAddress(f) => f.column_name(),
            DataField::Website(f) => f.column_name(),
            DataField::Custom(f) => f.column_name(),
        }
    }

    fn required(&self) -> bool {
        matches!(
            self,
            DataField::Generic(_)
                | DataField::Contact(DataContactsField::Id)
                | DataField::RawContact(DataRawContactsField::Id)
        )
    }

    fn required_fields() -> Vec<Self> {
        GenericDataField::ALL
            .iter()
            .copied()
            .map(DataField::from)
            .chain([
                DataField::Contact(DataContactsField::Id),
                DataField::RawContact(DataRawContactsField::Id),
            ])
            .collect()
    }
}

/// A field of the Contacts source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactsField {
    Id,
    LookupKey,
    DisplayNamePrimary,
    DisplayNameAlt,
    LastUpdatedTimestamp,
    PhotoUri,
    PhotoThumbnailUri,
    HasPhoneNumber,
    Starred,
    CustomRingtone,
    SendToVoicemail,
}

impl ContactsField {
    pub const ALL: &'static [ContactsField] = &[
        ContactsField::Id,
        ContactsField::LookupKey,
        ContactsField::DisplayNamePrimary,
        ContactsField::DisplayNameAlt,
        ContactsField::LastUpdatedTimestamp,
        ContactsField::PhotoUri,
        ContactsField::PhotoThumbnailUri,
        ContactsField::HasPhoneNumber,
        ContactsField::Starred,
        ContactsField::CustomRingtone,
        ContactsField::SendToVoicemail,
    ];
}

impl Field for ContactsField {
    fn column_name(&self) -> &str {
        match self {
            ContactsField::Id => "_id",
            ContactsField::LookupKey => "lookup",
            ContactsField::DisplayNamePrimary => "display_name",
            ContactsField::DisplayNameAlt => "display_name_alt",
            ContactsField::LastUpdatedTimestamp => "contact_last_updated_timestamp",
            ContactsField::PhotoUri => "photo_uri",
            ContactsField::PhotoThumbnailUri => "photo_thumb_uri",
            ContactsField::HasPhoneNumber => "has_phone_number",
            ContactsField::Starred => "starred",
            ContactsField::CustomRingtone => "custom_ringtone",
            ContactsField::SendToVoicemail => "send_to_voicemail",
        }
    }

    fn required(&self) -> bool {
        matches!(self, ContactsField::Id)
    }

    fn required_fields() -> Vec<Self> {
        vec![ContactsField::Id]
    }
}

/// A field of the RawContacts source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawContactsField {
    Id,
    ContactId,
    DisplayNamePrimary,
    DisplayNameAlt,
    AccountName,
    AccountType,
    SourceId,
}

impl RawContactsField {
    pub const ALL: &'static [RawContactsField] = &[
        RawContactsField::Id,
        RawContactsField::ContactId,
        RawContactsField::DisplayNamePrimary,
        RawContactsField::DisplayNameAlt,
        RawContactsField::AccountName,
        RawContactsField::AccountType,
        RawContactsField::SourceId,
    ];
}

impl Field for RawContactsField {
    fn column_name(&self) -> &str {
        match self {
            RawContactsField::Id => "_id",
            RawContactsField::ContactId => "contact_id",
            RawContactsField::DisplayNamePrimary => "display_name",
            RawContactsField::DisplayNameAlt => "display_name_alt",
            RawContactsField::AccountName => "account_name",
            RawContactsField::AccountType => "account_type",
            RawContactsField::SourceId => "sourceid",
        }
    }

    fn required(&self) -> bool {
        matches!(self, RawContactsField::Id | RawContactsField::ContactId)
    }

    fn required_fields() -> Vec<Self> {
        vec![RawContactsField::Id, RawContactsField::ContactId]
    }
}
