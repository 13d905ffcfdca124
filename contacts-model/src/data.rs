//! Built-in data entities.
//!
//! Each entity is one Data row of one [`DataKind`]. Every attribute other than
//! identity is optional: a `None` means either the row stored nothing or the
//! field was not in the include set, and callers cannot tell the two apart.

use crate::mime_type::DataKind;
use crate::redact::{Redactable, redacted};
use chrono::NaiveDate;
use contacts_types::{ContactId, DataId, GroupId, RawContactId};
use serde::Serialize;
use std::fmt;

/// Identity and primary flags shared by every data entity.
///
/// A super-primary row (preferred across the whole contact) is always also
/// primary (preferred within its raw contact); the constructor promotes
/// `is_primary` when needed so no entity can break that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DataMeta {
    id: DataId,
    raw_contact_id: RawContactId,
    contact_id: ContactId,
    is_primary: bool,
    is_super_primary: bool,
}

impl DataMeta {
    #[must_use]
    pub fn new(
        id: DataId,
        raw_contact_id: RawContactId,
        contact_id: ContactId,
        is_primary: bool,
        is_super_primary: bool,
    ) -> Self {
        Self {
            id,
            raw_contact_id,
            contact_id,
            is_primary: is_primary || is_super_primary,
            is_super_primary,
        }
    }

    #[must_use]
    pub fn id(&self) -> DataId {
        self.id
    }

    #[must_use]
    pub fn raw_contact_id(&self) -> RawContactId {
        self.raw_contact_id
    }

    #[must_use]
    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    /// Preferred entry of its kind within the raw contact.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Preferred entry of its kind within the whole contact.
    #[must_use]
    pub fn is_super_primary(&self) -> bool {
        self.is_super_primary
    }
}

/// Common behavior of built-in data entities.
pub trait DataEntity: Redactable {
    const KIND: DataKind;

    fn meta(&self) -> &DataMeta;

    /// True when every non-identity field is absent or empty.
    fn is_blank(&self) -> bool;
}

fn all_blank(values: &[Option<&str>]) -> bool {
    values.iter().all(|v| v.is_none_or(|s| s.trim().is_empty()))
}

macro_rules! data_type {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The integer code stored in the type column.
            #[must_use]
            pub const fn value(self) -> i64 {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Decodes a stored integer code. Unknown codes decode to `None`.
            #[must_use]
            pub const fn from_value(value: i64) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

data_type!(
    AddressType {
        Custom = 0,
        Home = 1,
        Work = 2,
        Other = 3,
    }
);

data_type!(
    EmailType {
        Custom = 0,
        Home = 1,
        Work = 2,
        Other = 3,
        Mobile = 4,
    }
);

data_type!(
    EventType {
        Custom = 0,
        Anniversary = 1,
        Other = 2,
        Birthday = 3,
    }
);

data_type!(
    PhoneType {
        Custom = 0,
        Home = 1,
        Mobile = 2,
        Work = 3,
        FaxWork = 4,
        FaxHome = 5,
        Pager = 6,
        Other = 7,
        Callback = 8,
        Car = 9,
        CompanyMain = 10,
        Isdn = 11,
        Main = 12,
        OtherFax = 13,
        Radio = 14,
        Telex = 15,
        TtyTdd = 16,
        WorkMobile = 17,
        WorkPager = 18,
        Assistant = 19,
        Mms = 20,
    }
);

data_type!(
    RelationType {
        Custom = 0,
        Assistant = 1,
        Brother = 2,
        Child = 3,
        DomesticPartner = 4,
        Father = 5,
        Friend = 6,
        Manager = 7,
        Mother = 8,
        Parent = 9,
        Partner = 10,
        ReferredBy = 11,
        Relative = 12,
        Sister = 13,
        Spouse = 14,
    }
);

data_type!(
    ImProtocol {
        Custom = -1,
        Aim = 0,
        Msn = 1,
        Yahoo = 2,
        Skype = 3,
        Qq = 4,
        GoogleTalk = 5,
        Icq = 6,
        Jabber = 7,
        NetMeeting = 8,
    }
);

/// The date of an [`Event`]. Birthdays are often stored without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventDate {
    pub year: Option<i32>,
    pub month: u32,
    pub day: u32,
}

impl EventDate {
    /// Parses the stored forms `yyyy-MM-dd` (optionally followed by a time
    /// part) and the yearless `--MM-dd`. Anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(month_day) = value.strip_prefix("--") {
            let (month, day) = month_day.split_once('-')?;
            let (month, day) = (month.parse().ok()?, day.parse().ok()?);
            // 2000 is a leap year, so Feb 29 birthdays validate.
            NaiveDate::from_ymd_opt(2000, month, day)?;
            return Some(Self { year: None, month, day });
        }

        let date_part = value.get(..10)?;
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
        use chrono::Datelike;
        Some(Self {
            year: Some(date.year()),
            month: date.month(),
            day: date.day(),
        })
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year:04}-{:02}-{:02}", self.month, self.day),
            None => write!(f, "--{:02}-{:02}", self.month, self.day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub meta: DataMeta,
    pub address_type: Option<AddressType>,
    pub label: Option<String>,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub po_box: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Address {
    const KIND: DataKind = DataKind::Address;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[
            self.formatted_address.as_deref(),
            self.street.as_deref(),
            self.po_box.as_deref(),
            self.neighborhood.as_deref(),
            self.city.as_deref(),
            self.region.as_deref(),
            self.post_code.as_deref(),
            self.country.as_deref(),
        ])
    }
}

impl Redactable for Address {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            formatted_address: redacted(&self.formatted_address),
            street: redacted(&self.street),
            po_box: redacted(&self.po_box),
            neighborhood: redacted(&self.neighborhood),
            city: redacted(&self.city),
            region: redacted(&self.region),
            post_code: redacted(&self.post_code),
            country: redacted(&self.country),
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Email {
    pub meta: DataMeta,
    pub email_type: Option<EmailType>,
    pub label: Option<String>,
    pub address: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Email {
    const KIND: DataKind = DataKind::Email;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.address.as_deref()])
    }
}

impl Redactable for Email {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            address: redacted(&self.address),
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub meta: DataMeta,
    pub event_type: Option<EventType>,
    pub label: Option<String>,
    pub date: Option<EventDate>,
    pub is_redacted: bool,
}

impl DataEntity for Event {
    const KIND: DataKind = DataKind::Event;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        self.date.is_none()
    }
}

impl Redactable for Event {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            label: redacted(&self.label),
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMembership {
    pub meta: DataMeta,
    pub group_id: Option<GroupId>,
    pub is_redacted: bool,
}

impl DataEntity for GroupMembership {
    const KIND: DataKind = DataKind::GroupMembership;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        self.group_id.is_none()
    }
}

impl Redactable for GroupMembership {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    // Group ids are not private user data.
    fn redacted_copy(&self) -> Self {
        Self {
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Im {
    pub meta: DataMeta,
    pub protocol: Option<ImProtocol>,
    pub custom_protocol: Option<String>,
    pub data: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Im {
    const KIND: DataKind = DataKind::Im;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.data.as_deref()])
    }
}

impl Redactable for Im {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            data: redacted(&self.data),
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    pub meta: DataMeta,
    pub display_name: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub family_name: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub phonetic_given_name: Option<String>,
    pub phonetic_middle_name: Option<String>,
    pub phonetic_family_name: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Name {
    const KIND: DataKind = DataKind::Name;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[
            self.display_name.as_deref(),
            self.given_name.as_deref(),
            self.middle_name.as_deref(),
            self.family_name.as_deref(),
            self.prefix.as_deref(),
            self.suffix.as_deref(),
            self.phonetic_given_name.as_deref(),
            self.phonetic_middle_name.as_deref(),
            self.phonetic_family_name.as_deref(),
        ])
    }
}

impl Redactable for Name {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            meta: self.meta,
            display_name: redacted(&self.display_name),
            given_name: redacted(&self.given_name),
            middle_name: redacted(&self.middle_name),
            family_name: redacted(&self.family_name),
            prefix: redacted(&self.prefix),
            suffix: redacted(&self.suffix),
            phonetic_given_name: redacted(&self.phonetic_given_name),
            phonetic_middle_name: redacted(&self.phonetic_middle_name),
            phonetic_family_name: redacted(&self.phonetic_family_name),
            is_redacted: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nickname {
    pub meta: DataMeta,
    pub name: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Nickname {
    const KIND: DataKind = DataKind::Nickname;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.name.as_deref()])
    }
}

impl Redactable for Nickname {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            meta: self.meta,
            name: redacted(&self.name),
            is_redacted: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub meta: DataMeta,
    pub note: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Note {
    const KIND: DataKind = DataKind::Note;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.note.as_deref()])
    }
}

impl Redactable for Note {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            meta: self.meta,
            note: redacted(&self.note),
            is_redacted: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    pub meta: DataMeta,
    pub company: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub job_description: Option<String>,
    pub office_location: Option<String>,
    pub symbol: Option<String>,
    pub phonetic_name: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Organization {
    const KIND: DataKind = DataKind::Organization;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[
            self.company.as_deref(),
            self.title.as_deref(),
            self.department.as_deref(),
            self.job_description.as_deref(),
            self.office_location.as_deref(),
            self.symbol.as_deref(),
            self.phonetic_name.as_deref(),
        ])
    }
}

impl Redactable for Organization {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            meta: self.meta,
            company: redacted(&self.company),
            title: redacted(&self.title),
            department: redacted(&self.department),
            job_description: redacted(&self.job_description),
            office_location: redacted(&self.office_location),
            symbol: redacted(&self.symbol),
            phonetic_name: redacted(&self.phonetic_name),
            is_redacted: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phone {
    pub meta: DataMeta,
    pub phone_type: Option<PhoneType>,
    pub label: Option<String>,
    pub number: Option<String>,
    pub normalized_number: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Phone {
    const KIND: DataKind = DataKind::Phone;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.number.as_deref(), self.normalized_number.as_deref()])
    }
}

impl Redactable for Phone {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            number: redacted(&self.number),
            normalized_number: redacted(&self.normalized_number),
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    pub meta: DataMeta,
    pub relation_type: Option<RelationType>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Relation {
    const KIND: DataKind = DataKind::Relation;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.name.as_deref()])
    }
}

impl Redactable for Relation {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            name: redacted(&self.name),
            is_redacted: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SipAddress {
    pub meta: DataMeta,
    pub sip_address: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for SipAddress {
    const KIND: DataKind = DataKind::SipAddress;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.sip_address.as_deref()])
    }
}

impl Redactable for SipAddress {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            meta: self.meta,
            sip_address: redacted(&self.sip_address),
            is_redacted: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Website {
    pub meta: DataMeta,
    pub url: Option<String>,
    pub is_redacted: bool,
}

impl DataEntity for Website {
    const KIND: DataKind = DataKind::Website;

    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.url.as_deref()])
    }
}

impl Redactable for Website {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            meta: self.meta,
            url: redacted(&self.url),
            is_redacted: true,
        }
    }
}

/// One mapped built-in Data row, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuiltInData {
    Address(Address),
    Email(Email),
    Event(Event),
    GroupMembership(GroupMembership),
    Im(Im),
    Name(Name),
    Nickname(Nickname),
    Note(Note),
    Organization(Organization),
    Phone(Phone),
    Relation(Relation),
    SipAddress(SipAddress),
    Website(Website),
}

impl BuiltInData {
    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            BuiltInData::Address(_) => DataKind::Address,
            BuiltInData::Email(_) => DataKind::Email,
            BuiltInData::Event(_) => DataKind::Event,
            BuiltInData::GroupMembership(_) => DataKind::GroupMembership,
            BuiltInData::Im(_) => DataKind::Im,
            BuiltInData::Name(_) => DataKind::Name,
            BuiltInData::Nickname(_) => DataKind::Nickname,
            BuiltInData::Note(_) => DataKind::Note,
            BuiltInData::Organization(_) => DataKind::Organization,
            BuiltInData::Phone(_) => DataKind::Phone,
            BuiltInData::Relation(_) => DataKind::Relation,
            BuiltInData::SipAddress(_) => DataKind::SipAddress,
            BuiltInData::Website(_) => DataKind::Website,
        }
    }

    #[must_use]
    pub fn meta(&self) -> &DataMeta {
        match self {
            BuiltInData::Address(e) => e.meta(),
            BuiltInData::Email(e) => e.meta(),
            BuiltInData::Event(e) => e.meta(),
            BuiltInData::GroupMembership(e) => e.meta(),
            BuiltInData::Im(e) => e.meta(),
            BuiltInData::Name(e) => e.meta(),
            BuiltInData::Nickname(e) => e.meta(),
            BuiltInData::Note(e) => e.meta(),
            BuiltInData::Organization(e) => e.meta(),
            BuiltInData::Phone(e) => e.meta(),
            BuiltInData::Relation(e) => e.meta(),
            BuiltInData::SipAddress(e) => e.meta(),
            BuiltInData::Website(e) => e.meta(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            BuiltInData::Address(e) => e.is_blank(),
            BuiltInData::Email(e) => e.is_blank(),
            BuiltInData::Event(e) => e.is_blank(),
            BuiltInData::GroupMembership(e) => e.is_blank(),
            BuiltInData::Im(e) => e.is_blank(),
            BuiltInData::Name(e) => e.is_blank(),
            BuiltInData::Nickname(e) => e.is_blank(),
            BuiltInData::Note(e) => e.is_blank(),
            BuiltInData::Organization(e) => e.is_blank(),
            BuiltInData::Phone(e) => e.is_blank(),
            BuiltInData::Relation(e) => e.is_blank(),
            BuiltInData::SipAddress(e) => e.is_blank(),
            BuiltInData::Website(e) => e.is_blank(),
        }
    }
}
