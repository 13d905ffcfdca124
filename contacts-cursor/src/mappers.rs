//! Entity mappers: the current row of a cursor, read as one entity.
//!
//! A mapper holds a row view and re-reads it on every [`EntityMapper::value`]
//! call, so it must only be called while the cursor sits on the intended row.

use crate::reader::EntityCursor;
use crate::sources::{
    ContactIdCursor, ContactsCursor, DataCursor, RawContactIdCursor, RawContactsCursor,
};
use contacts_model::{
    Address, AddressField, AddressType, BlankRawContact, BuiltInData, Contact, ContactsField,
    DataField, DataKind, DataMeta, Email, EmailField, EmailType, Event, EventDate, EventField,
    EventType, GroupMembership, GroupMembershipField, Im, ImField, ImProtocol, Name, NameField,
    Nickname, NicknameField, Note, NoteField, Options, Organization, OrganizationField, Phone,
    PhoneField, PhoneType, RawContactsField, Relation, RelationField, RelationType, SipAddress,
    SipAddressField, Website, WebsiteField,
};

/// Maps the current row to an entity.
pub trait EntityMapper {
    type Entity;

    /// `None` only when the row lacks the identity columns needed to place
    /// the entity. Every other attribute degrades to `None` on its own.
    fn value(&self) -> Option<Self::Entity>;
}

/// Reads a Data row as one built-in kind.
pub struct DataMapper<'a> {
    kind: DataKind,
    cursor: DataCursor<'a>,
}

impl<'a> DataMapper<'a> {
    pub fn new(kind: DataKind, cursor: DataCursor<'a>) -> Self {
        Self { kind, cursor }
    }
}

impl EntityMapper for DataMapper<'_> {
    type Entity = BuiltInData;

    fn value(&self) -> Option<BuiltInData> {
        let meta = self.cursor.meta()?;
        let r = self.cursor.reader();
        Some(match self.kind {
            DataKind::Address => BuiltInData::Address(address(meta, r)),
            DataKind::Email => BuiltInData::Email(email(meta, r)),
            DataKind::Event => BuiltInData::Event(event(meta, r)),
            DataKind::GroupMembership => BuiltInData::GroupMembership(group_membership(meta, r)),
            DataKind::Im => BuiltInData::Im(im(meta, r)),
            DataKind::Name => BuiltInData::Name(name(meta, r)),
            DataKind::Nickname => BuiltInData::Nickname(Nickname {
                meta,
                name: r.string(&NicknameField::Name.into()),
                is_redacted: false,
            }),
            DataKind::Note => BuiltInData::Note(Note {
                meta,
                note: r.string(&NoteField::Note.into()),
                is_redacted: false,
            }),
            DataKind::Organization => BuiltInData::Organization(organization(meta, r)),
            DataKind::Phone => BuiltInData::Phone(phone(meta, r)),
            DataKind::Relation => BuiltInData::Relation(relation(meta, r)),
            DataKind::SipAddress => BuiltInData::SipAddress(SipAddress {
                meta,
                sip_address: r.string(&SipAddressField::SipAddress.into()),
                is_redacted: false,
            }),
            DataKind::Website => BuiltInData::Website(Website {
                meta,
                url: r.string(&WebsiteField::Url.into()),
                is_redacted: false,
            }),
        })
    }
}

type DataReader<'r, 'a> = &'r EntityCursor<'a, DataField>;

fn address(meta: DataMeta, r: DataReader<'_, '_>) -> Address {
    Address {
        meta,
        address_type: r.long(&AddressField::Type.into()).and_then(AddressType::from_value),
        label: r.string(&AddressField::Label.into()),
        formatted_address: r.string(&AddressField::FormattedAddress.into()),
        street: r.string(&AddressField::Street.into()),
        po_box: r.string(&AddressField::PoBox.into()),
        neighborhood: r.string(&AddressField::Neighborhood.into()),
        city: r.string(&AddressField::City.into()),
        region: r.string(&AddressField::Region.into()),
        post_code: r.string(&AddressField::PostCode.into()),
        country: r.string(&AddressField::Country.into()),
        is_redacted: false,
    }
}

fn email(meta: DataMeta, r: DataReader<'_, '_>) -> Email {
    Email {
        meta,
        email_type: r.long(&EmailField::Type.into()).and_then(EmailType::from_value),
        label: r.string(&EmailField::Label.into()),
        address: r.string(&EmailField::Address.into()),
        is_redacted: false,
    }
}

fn event(meta: DataMeta, r: DataReader<'_, '_>) -> Event {
    Event {
        meta,
        event_type: r.long(&EventField::Type.into()).and_then(EventType::from_value),
        label: r.string(&EventField::Label.into()),
        date: r
            .string(&EventField::Date.into())
            .and_then(|s| EventDate::parse(&s)),
        is_redacted: false,
    }
}

fn group_membership(meta: DataMeta, r: DataReader<'_, '_>) -> GroupMembership {
    GroupMembership {
        meta,
        group_id: r.id(&GroupMembershipField::GroupId.into()),
        is_redacted: false,
    }
}

fn im(meta: DataMeta, r: DataReader<'_, '_>) -> Im {
    Im {
        meta,
        protocol: r.long(&ImField::Protocol.into()).and_then(ImProtocol::from_value),
        custom_protocol: r.string(&ImField::CustomProtocol.into()),
        data: r.string(&ImField::Data.into()),
        is_redacted: false,
    }
}

fn name(meta: DataMeta, r: DataReader<'_, '_>) -> Name {
    Name {
        meta,
        display_name: r.string(&NameField::DisplayName.into()),
        given_name: r.string(&NameField::GivenName.into()),
        middle_name: r.string(&NameField::MiddleName.into()),
        family_name: r.string(&NameField::FamilyName.into()),
        prefix: r.string(&NameField::Prefix.into()),
        suffix: r.string(&NameField::Suffix.into()),
        phonetic_given_name: r.string(&NameField::PhoneticGivenName.into()),
        phonetic_middle_name: r.string(&NameField::PhoneticMiddleName.into()),
        phonetic_family_name: r.string(&NameField::PhoneticFamilyName.into()),
        is_redacted: false,
    }
}

fn organization(meta: DataMeta, r: DataReader<'_, '_>) -> Organization {
    Organization {
        meta,
        company: r.string(&OrganizationField::Company.into()),
        title: r.string(&OrganizationField::Title.into()),
        department: r.string(&OrganizationField::Department.into()),
        job_description: r.string(&OrganizationField::JobDescription.into()),
        office_location: r.string(&OrganizationField::OfficeLocation.into()),
        symbol: r.string(&OrganizationField::Symbol.into()),
        phonetic_name: r.string(&OrganizationField::PhoneticName.into()),
        is_redacted: false,
    }
}

fn phone(meta: DataMeta, r: DataReader<'_, '_>) -> Phone {
    Phone {
        meta,
        phone_type: r.long(&PhoneField::Type.into()).and_then(PhoneType::from_value),
        label: r.string(&PhoneField::Label.into()),
        number: r.string(&PhoneField::Number.into()),
        normalized_number: r.string(&PhoneField::NormalizedNumber.into()),
        is_redacted: false,
    }
}

fn relation(meta: DataMeta, r: DataReader<'_, '_>) -> Relation {
    Relation {
        meta,
        relation_type: r.long(&RelationField::Type.into()).and_then(RelationType::from_value),
        label: r.string(&RelationField::Label.into()),
        name: r.string(&RelationField::Name.into()),
        is_redacted: false,
    }
}

/// Reads a Contacts row as a contact without raw contacts.
pub struct ContactMapper<'a> {
    cursor: ContactsCursor<'a>,
}

impl<'a> ContactMapper<'a> {
    pub fn new(cursor: ContactsCursor<'a>) -> Self {
        Self { cursor }
    }
}

impl EntityMapper for ContactMapper<'_> {
    type Entity = Contact;

    fn value(&self) -> Option<Contact> {
        let id = self.cursor.contact_id()?;
        let r = self.cursor.reader();
        let options = OptionsMapper::new(self.cursor).value().filter(|o| !o.is_empty());
        Some(Contact {
            lookup_key: r.string(&ContactsField::LookupKey),
            display_name_primary: r.string(&ContactsField::DisplayNamePrimary),
            display_name_alt: r.string(&ContactsField::DisplayNameAlt),
            last_updated_timestamp: r.timestamp(&ContactsField::LastUpdatedTimestamp),
            photo_uri: r.uri(&ContactsField::PhotoUri),
            photo_thumbnail_uri: r.uri(&ContactsField::PhotoThumbnailUri),
            has_phone_number: r.boolean(&ContactsField::HasPhoneNumber),
            options,
            ..Contact::shell(id)
        })
    }
}

/// Reads the option columns of a Contacts row.
pub struct OptionsMapper<'a> {
    cursor: ContactsCursor<'a>,
}

impl<'a> OptionsMapper<'a> {
    pub fn new(cursor: ContactsCursor<'a>) -> Self {
        Self { cursor }
    }
}

impl EntityMapper for OptionsMapper<'_> {
    type Entity = Options;

    fn value(&self) -> Option<Options> {
        let r = self.cursor.reader();
        Some(Options {
            starred: r.boolean(&ContactsField::Starred),
            custom_ringtone: r.uri(&ContactsField::CustomRingtone),
            send_to_voicemail: r.boolean(&ContactsField::SendToVoicemail),
        })
    }
}

/// Reads a RawContacts row as a raw contact without data.
pub struct BlankRawContactMapper<'a> {
    cursor: RawContactsCursor<'a>,
}

impl<'a> BlankRawContactMapper<'a> {
    pub fn new(cursor: RawContactsCursor<'a>) -> Self {
        Self { cursor }
    }
}

impl EntityMapper for BlankRawContactMapper<'_> {
    type Entity = BlankRawContact;

    fn value(&self) -> Option<BlankRawContact> {
        let r = self.cursor.reader();
        Some(BlankRawContact {
            id: self.cursor.raw_contact_id()?,
            contact_id: self.cursor.contact_id()?,
            display_name_primary: r.string(&RawContactsField::DisplayNamePrimary),
            display_name_alt: r.string(&RawContactsField::DisplayNameAlt),
            account: self.cursor.account(),
            source_id: r.string(&RawContactsField::SourceId),
        })
    }
}
