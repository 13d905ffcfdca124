//! Mime types: the discriminator column of the Data source.

use crate::custom::CountRestriction;
use crate::fields::{
    AddressField, DataField, EmailField, EventField, GroupMembershipField, ImField, NameField,
    NicknameField, NoteField, OrganizationField, PhoneField, RelationField, SipAddressField,
    WebsiteField,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The built-in data kinds.
///
/// This is a closed set; third-party kinds are [`MimeType::Custom`] and go
/// through the custom data registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Address,
    Email,
    Event,
    GroupMembership,
    Im,
    Name,
    Nickname,
    Note,
    Organization,
    Phone,
    Relation,
    SipAddress,
    Website,
}

impl DataKind {
    /// Every built-in kind.
    pub const ALL: [DataKind; 13] = [
        DataKind::Address,
        DataKind::Email,
        DataKind::Event,
        DataKind::GroupMembership,
        DataKind::Im,
        DataKind::Name,
        DataKind::Nickname,
        DataKind::Note,
        DataKind::Organization,
        DataKind::Phone,
        DataKind::Relation,
        DataKind::SipAddress,
        DataKind::Website,
    ];

    /// The mime type value stored in the Data source's `mimetype` column.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            DataKind::Address => "vnd.android.cursor.item/postal-address_v2",
            DataKind::Email => "vnd.android.cursor.item/email_v2",
            DataKind::Event => "vnd.android.cursor.item/contact_event",
            DataKind::GroupMembership => "vnd.android.cursor.item/group_membership",
            DataKind::Im => "vnd.android.cursor.item/im",
            DataKind::Name => "vnd.android.cursor.item/name",
            DataKind::Nickname => "vnd.android.cursor.item/nickname",
            DataKind::Note => "vnd.android.cursor.item/note",
            DataKind::Organization => "vnd.android.cursor.item/organization",
            DataKind::Phone => "vnd.android.cursor.item/phone_v2",
            DataKind::Relation => "vnd.android.cursor.item/relation",
            DataKind::SipAddress => "vnd.android.cursor.item/sip_address",
            DataKind::Website => "vnd.android.cursor.item/website",
        }
    }

    /// Looks up the built-in kind for a mime type value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }

    /// How many entities of this kind a raw contact may hold.
    #[must_use]
    pub const fn count_restriction(self) -> CountRestriction {
        match self {
            DataKind::Name
            | DataKind::Nickname
            | DataKind::Note
            | DataKind::Organization
            | DataKind::SipAddress => CountRestriction::AtMostOne,
            DataKind::Address
            | DataKind::Email
            | DataKind::Event
            | DataKind::GroupMembership
            | DataKind::Im
            | DataKind::Phone
            | DataKind::Relation
            | DataKind::Website => CountRestriction::NoLimit,
        }
    }

    /// The data fields that belong to this kind.
    #[must_use]
    pub fn fields(self) -> Vec<DataField> {
        match self {
            DataKind::Address => AddressField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Email => EmailField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Event => EventField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::GroupMembership => {
                GroupMembershipField::ALL.iter().copied().map(Into::into).collect()
            }
            DataKind::Im => ImField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Name => NameField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Nickname => NicknameField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Note => NoteField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Organization => {
                OrganizationField::ALL.iter().copied().map(Into::into).collect()
            }
            DataKind::Phone => PhoneField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Relation => RelationField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::SipAddress => SipAddressField::ALL.iter().copied().map(Into::into).collect(),
            DataKind::Website => WebsiteField::ALL.iter().copied().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// The resolved mime type of a Data row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MimeType {
    /// One of the built-in kinds.
    BuiltIn(DataKind),
    /// A kind registered in the custom data registry.
    Custom(String),
    /// A kind nobody registered, or a row with no mime type at all.
    Unknown(Option<String>),
}

impl MimeType {
    /// The stored mime type value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            MimeType::BuiltIn(kind) => Some(kind.value()),
            MimeType::Custom(value) => Some(value),
            MimeType::Unknown(value) => value.as_deref(),
        }
    }
}

impl From<DataKind> for MimeType {
    fn from(kind: DataKind) -> Self {
        MimeType::BuiltIn(kind)
    }
}
