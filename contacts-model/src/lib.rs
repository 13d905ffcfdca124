//! Entity model for the contacts aggregation engine.
//!
//! Defines the types every stage of aggregation speaks:
//! - [`Field`] and its three source-specific field sets ([`DataField`],
//!   [`ContactsField`], [`RawContactsField`])
//! - [`DataKind`] and [`MimeType`]: the closed set of built-in data kinds
//!   plus the open set of custom kinds
//! - [`Include`]: the projection a caller opted into
//! - [`Contact`], [`RawContact`] and the incremental [`RawContactBuilder`]
//! - Built-in data entities ([`Phone`], [`Email`], ...) and the
//!   [`CustomDataEntity`] trait for registry-driven kinds
//!
//! Nothing here reads rows or knows about the registry; those live in
//! `contacts-cursor` and `contacts-registry`.

mod contact;
mod custom;
mod data;
mod fields;
mod include;
mod mime_type;
mod raw_contact;
mod redact;

pub use contact::{Contact, Options};
pub use custom::{
    CountRestriction, CustomDataContainer, CustomDataEntity, CustomDataEntityHolder, dyn_eq_as,
};
pub use data::{
    Address, AddressType, BuiltInData, DataEntity, DataMeta, Email, EmailType, Event, EventDate,
    EventType, GroupMembership, Im, ImProtocol, Name, Nickname, Note, Organization, Phone,
    PhoneType, Relation, RelationType, SipAddress, Website,
};
pub use fields::{
    AddressField, ContactsField, CustomDataField, DataContactsField, DataField,
    DataRawContactsField, EmailField, EventField, Field, GenericDataField, GroupMembershipField,
    ImField, NameField, NicknameField, NoteField, OrganizationField, PhoneField, RawContactsField,
    RelationField, SipAddressField, WebsiteField,
};
pub use include::Include;
pub use mime_type::{DataKind, MimeType};
pub use raw_contact::{Account, BlankRawContact, RawContact, RawContactBuilder};
pub use redact::{Redactable, redact_str, redacted};
