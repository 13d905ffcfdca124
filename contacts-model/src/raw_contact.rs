//! Raw contacts and the mutable builder the aggregator fills row by row.

use crate::custom::{CustomDataContainer, CustomDataEntityHolder};
use crate::data::{
    Address, BuiltInData, Email, Event, GroupMembership, Im, Name, Nickname, Note, Organization,
    Phone, Relation, SipAddress, Website,
};
use crate::redact::{Redactable, redacted};
use contacts_types::{ContactId, RawContactId};
use serde::Serialize;
use std::collections::BTreeMap;

/// The sync account a raw contact belongs to. Local raw contacts have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Account {
    pub name: String,
    pub account_type: String,
}

impl Account {
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
        }
    }
}

/// Raw-contact-level attributes read from a RawContacts row, without any data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankRawContact {
    pub id: RawContactId,
    pub contact_id: ContactId,
    pub display_name_primary: Option<String>,
    pub display_name_alt: Option<String>,
    pub account: Option<Account>,
    pub source_id: Option<String>,
}

/// One account's view of a contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawContact {
    pub id: RawContactId,
    pub contact_id: ContactId,
    pub is_profile: bool,
    pub display_name_primary: Option<String>,
    pub display_name_alt: Option<String>,
    pub account: Option<Account>,
    pub source_id: Option<String>,

    pub name: Option<Name>,
    pub nickname: Option<Nickname>,
    pub note: Option<Note>,
    pub organization: Option<Organization>,
    pub sip_address: Option<SipAddress>,

    pub addresses: Vec<Address>,
    pub emails: Vec<Email>,
    pub events: Vec<Event>,
    pub group_memberships: Vec<GroupMembership>,
    pub ims: Vec<Im>,
    pub phones: Vec<Phone>,
    pub relations: Vec<Relation>,
    pub websites: Vec<Website>,

    /// Custom data keyed by mime type value.
    #[serde(skip)]
    pub custom_data: BTreeMap<String, CustomDataEntityHolder>,

    pub is_redacted: bool,
}

impl RawContact {
    fn empty(id: RawContactId, contact_id: ContactId) -> Self {
        Self {
            id,
            contact_id,
            is_profile: id.is_profile(),
            display_name_primary: None,
            display_name_alt: None,
            account: None,
            source_id: None,
            name: None,
            nickname: None,
            note: None,
            organization: None,
            sip_address: None,
            addresses: Vec::new(),
            emails: Vec::new(),
            events: Vec::new(),
            group_memberships: Vec::new(),
            ims: Vec::new(),
            phones: Vec::new(),
            relations: Vec::new(),
            websites: Vec::new(),
            custom_data: BTreeMap::new(),
            is_redacted: false,
        }
    }

    /// True when no built-in or custom data is attached.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_none()
            && self.nickname.is_none()
            && self.note.is_none()
            && self.organization.is_none()
            && self.sip_address.is_none()
            && self.addresses.is_empty()
            && self.emails.is_empty()
            && self.events.is_empty()
            && self.group_memberships.is_empty()
            && self.ims.is_empty()
            && self.phones.is_empty()
            && self.relations.is_empty()
            && self.websites.is_empty()
            && self.custom_data.values().all(CustomDataEntityHolder::is_empty)
    }
}

impl Redactable for RawContact {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        fn all<T: Redactable>(items: &[T]) -> Vec<T> {
            items.iter().map(Redactable::redacted_copy).collect()
        }

        Self {
            id: self.id,
            contact_id: self.contact_id,
            is_profile: self.is_profile,
            display_name_primary: redacted(&self.display_name_primary),
            display_name_alt: redacted(&self.display_name_alt),
            account: self.account.as_ref().map(|account| Account {
                name: crate::redact::redact_str(&account.name),
                account_type: account.account_type.clone(),
            }),
            source_id: self.source_id.clone(),
            name: self.name.as_ref().map(Redactable::redacted_copy),
            nickname: self.nickname.as_ref().map(Redactable::redacted_copy),
            note: self.note.as_ref().map(Redactable::redacted_copy),
            organization: self.organization.as_ref().map(Redactable::redacted_copy),
            sip_address: self.sip_address.as_ref().map(Redactable::redacted_copy),
            addresses: all(&self.addresses),
            emails: all(&self.emails),
            events: all(&self.events),
            group_memberships: all(&self.group_memberships),
            ims: all(&self.ims),
            phones: all(&self.phones),
            relations: all(&self.relations),
            websites: all(&self.websites),
            custom_data: self
                .custom_data
                .iter()
                .map(|(mime, holder)| (mime.clone(), holder.redacted_copy()))
                .collect(),
            is_redacted: true,
        }
    }
}

impl CustomDataContainer for RawContact {
    fn custom_data(&self) -> &BTreeMap<String, CustomDataEntityHolder> {
        &self.custom_data
    }

    fn custom_data_mut(&mut self) -> &mut BTreeMap<String, CustomDataEntityHolder> {
        &mut self.custom_data
    }
}

/// A raw contact under construction.
///
/// Data rows arrive one at a time and in any order, so the builder is
/// mutable until [`RawContactBuilder::build`] freezes it.
#[derive(Debug, Clone)]
pub struct RawContactBuilder {
    raw: RawContact,
}

impl RawContactBuilder {
    /// An empty builder, as created on the first Data row of a raw contact.
    #[must_use]
    pub fn new(id: RawContactId, contact_id: ContactId) -> Self {
        Self {
            raw: RawContact::empty(id, contact_id),
        }
    }

    /// A builder for a raw contact seen only in the RawContacts source.
    #[must_use]
    pub fn blank(blank: BlankRawContact) -> Self {
        let mut builder = Self::new(blank.id, blank.contact_id);
        builder.hydrate(blank);
        builder
    }

    #[must_use]
    pub fn id(&self) -> RawContactId {
        self.raw.id
    }

    #[must_use]
    pub fn contact_id(&self) -> ContactId {
        self.raw.contact_id
    }

    /// Fills in raw-contact-level attributes that are still missing. Values
    /// already present are kept.
    pub fn hydrate(&mut self, blank: BlankRawContact) {
        let raw = &mut self.raw;
        if raw.display_name_primary.is_none() {
            raw.display_name_primary = blank.display_name_primary;
        }
        if raw.display_name_alt.is_none() {
            raw.display_name_alt = blank.display_name_alt;
        }
        if raw.account.is_none() {
            raw.account = blank.account;
        }
        if raw.source_id.is_none() {
            raw.source_id = blank.source_id;
        }
    }

    /// Sets the account from the joined RawContacts columns of a Data row.
    pub fn set_account(&mut self, account: Option<Account>) {
        if account.is_some() {
            self.raw.account = account;
        }
    }

    /// Adds one built-in entity. Single-valued kinds are overwritten by the
    /// latest row; list kinds append.
    pub fn put(&mut self, data: BuiltInData) {
        let raw = &mut self.raw;
        match data {
            BuiltInData::Name(name) => raw.name = Some(name),
            BuiltInData::Nickname(nickname) => raw.nickname = Some(nickname),
            BuiltInData::Note(note) => raw.note = Some(note),
            BuiltInData::Organization(organization) => raw.organization = Some(organization),
            BuiltInData::SipAddress(sip_address) => raw.sip_address = Some(sip_address),
            BuiltInData::Address(address) => raw.addresses.push(address),
            BuiltInData::Email(email) => raw.emails.push(email),
            BuiltInData::Event(event) => raw.events.push(event),
            BuiltInData::GroupMembership(membership) => raw.group_memberships.push(membership),
            BuiltInData::Im(im) => raw.ims.push(im),
            BuiltInData::Phone(phone) => raw.phones.push(phone),
            BuiltInData::Relation(relation) => raw.relations.push(relation),
            BuiltInData::Website(website) => raw.websites.push(website),
        }
    }

    /// Freezes the builder.
    #[must_use]
    pub fn build(self) -> RawContact {
        self.raw
    }
}

impl CustomDataContainer for RawContactBuilder {
    fn custom_data(&self) -> &BTreeMap<String, CustomDataEntityHolder> {
        &self.raw.custom_data
    }

    fn custom_data_mut(&mut self) -> &mut BTreeMap<String, CustomDataEntityHolder> {
        &mut self.raw.custom_data
    }
}
