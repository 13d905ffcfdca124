//! Aggregated contacts.

use crate::raw_contact::RawContact;
use crate::redact::{Redactable, redacted};
use contacts_types::{ContactId, Timestamp};
use serde::Serialize;

/// Per-contact options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Options {
    pub starred: Option<bool>,
    pub custom_ringtone: Option<String>,
    pub send_to_voicemail: Option<bool>,
}

impl Options {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starred.is_none() && self.custom_ringtone.is_none() && self.send_to_voicemail.is_none()
    }
}

/// One aggregated contact and the raw contacts linked to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub is_profile: bool,
    pub lookup_key: Option<String>,
    pub display_name_primary: Option<String>,
    pub display_name_alt: Option<String>,
    pub last_updated_timestamp: Option<Timestamp>,
    pub photo_uri: Option<String>,
    pub photo_thumbnail_uri: Option<String>,
    pub has_phone_number: Option<bool>,
    pub options: Option<Options>,
    /// Sorted ascending by raw contact id.
    pub raw_contacts: Vec<RawContact>,
    pub is_redacted: bool,
}

impl Contact {
    /// A contact that carries only its identity. Built when a Data or
    /// RawContacts row names a contact the Contacts source never returned.
    #[must_use]
    pub fn shell(id: ContactId) -> Self {
        Self {
            id,
            is_profile: id.is_profile(),
            lookup_key: None,
            display_name_primary: None,
            display_name_alt: None,
            last_updated_timestamp: None,
            photo_uri: None,
            photo_thumbnail_uri: None,
            has_phone_number: None,
            options: None,
            raw_contacts: Vec::new(),
            is_redacted: false,
        }
    }

    /// True when no contact-level attribute is set.
    #[must_use]
    pub fn is_shell(&self) -> bool {
        self.lookup_key.is_none()
            && self.display_name_primary.is_none()
            && self.display_name_alt.is_none()
            && self.last_updated_timestamp.is_none()
            && self.photo_uri.is_none()
            && self.photo_thumbnail_uri.is_none()
            && self.has_phone_number.is_none()
            && self.options.is_none()
    }
}

impl Redactable for Contact {
    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Self {
        Self {
            id: self.id,
            is_profile: self.is_profile,
            lookup_key: redacted(&self.lookup_key),
            display_name_primary: redacted(&self.display_name_primary),
            display_name_alt: redacted(&self.display_name_alt),
            last_updated_timestamp: self.last_updated_timestamp,
            photo_uri: self.photo_uri.clone(),
            photo_thumbnail_uri: self.photo_thumbnail_uri.clone(),
            has_phone_number: self.has_phone_number,
            options: self.options.clone(),
            raw_contacts: self.raw_contacts.iter().map(Redactable::redacted_copy).collect(),
            is_redacted: true,
        }
    }
}
