//! The aggregation engine.
//!
//! Rows arrive in three independent phases and are merged into per-contact
//! and per-raw-contact state; [`ContactsAggregator::map_contacts`] joins
//! that state into contact graphs. Phases must run in order: Data rows,
//! then Contacts rows, then RawContacts rows, then the join.
//!
//! Every phase rewinds its cursor before reading, so a cursor the caller
//! already walked is read in full.
//!
//! Cancellation is cooperative. The predicate is polled before every row and
//! while joining; once it returns true all state is dropped and every later
//! call yields nothing, so callers see either a complete result or none.

use crate::config::AggregatorConfig;
use contacts_cursor::{
    BlankRawContactMapper, ContactIdCursor, ContactMapper, ContactsCursor, Cursor, DataCursor,
    DataMapper, EntityMapper, RawContactIdCursor, RawContactsCursor,
};
use contacts_model::{
    Contact, ContactsField, DataField, Include, MimeType, RawContact, RawContactBuilder,
    RawContactsField, Redactable,
};
use contacts_registry::CustomDataRegistry;
use contacts_types::{ContactId, RawContactId};
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

struct ContactSlot {
    contact: Contact,
    /// Set once a Contacts row has been mapped into `contact`.
    hydrated: bool,
}

impl ContactSlot {
    fn shell(id: ContactId) -> Self {
        Self {
            contact: Contact::shell(id),
            hydrated: false,
        }
    }
}

/// Merges row streams into contact graphs. Owned by one aggregation; not
/// shared between threads.
pub struct ContactsAggregator<'r> {
    registry: &'r CustomDataRegistry,
    config: AggregatorConfig,
    cancel: Box<dyn Fn() -> bool + 'r>,
    cancelled: bool,
    contacts: IndexMap<ContactId, ContactSlot>,
    raw_contacts: IndexMap<RawContactId, RawContactBuilder>,
}

impl<'r> ContactsAggregator<'r> {
    pub fn new(registry: &'r CustomDataRegistry, config: AggregatorConfig) -> Self {
        Self {
            registry,
            config,
            cancel: Box::new(|| false),
            cancelled: false,
            contacts: IndexMap::new(),
            raw_contacts: IndexMap::new(),
        }
    }

    /// Installs the cancellation predicate.
    #[must_use]
    pub fn with_cancel(mut self, cancel: impl Fn() -> bool + 'r) -> Self {
        self.cancel = Box::new(cancel);
        self
    }

    #[must_use]
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Polls the predicate. The first positive answer drops all state.
    pub fn is_cancelled(&mut self) -> bool {
        if !self.cancelled && (self.cancel)() {
            debug!(
                contacts = self.contacts.len(),
                raw_contacts = self.raw_contacts.len(),
                "aggregation cancelled, discarding state"
            );
            self.cancelled = true;
            self.contacts.clear();
            self.raw_contacts.clear();
        }
        self.cancelled
    }

    /// Contact ids seen so far, in first-seen order. The query layer uses
    /// them to select the Contacts rows of the next phase.
    pub fn contact_ids(&self) -> impl Iterator<Item = ContactId> + '_ {
        self.contacts.keys().copied()
    }

    /// Raw contact ids seen so far, in first-seen order.
    pub fn raw_contact_ids(&self) -> impl Iterator<Item = RawContactId> + '_ {
        self.raw_contacts.keys().copied()
    }

    // ── Phase 1: Data rows ───────────────────────────────────────

    /// Dispatches every Data row to its raw contact. Built-in kinds are
    /// mapped directly and registered custom kinds go through their registry
    /// entry. Rows of unknown kinds are skipped before any contact or raw
    /// contact is created for them.
    pub fn process_data_rows(&mut self, cursor: &mut dyn Cursor, include: &Include<DataField>) {
        cursor.reset_position();
        let mut rows = 0usize;
        loop {
            if self.is_cancelled() || !cursor.move_to_next() {
                break;
            }
            self.process_data_row(&DataCursor::new(&*cursor, include));
            rows += 1;
        }
        debug!(rows, raw_contacts = self.raw_contacts.len(), "processed data rows");
    }

    fn process_data_row(&mut self, row: &DataCursor<'_>) {
        let (Some(contact_id), Some(raw_contact_id)) = (row.contact_id(), row.raw_contact_id())
        else {
            trace!("skipping data row without contact or raw contact id");
            return;
        };

        // Unknown kinds leave no trace, not even a shell contact.
        let mime_type = match self.registry.resolve(row.mime_type().as_deref()) {
            MimeType::Unknown(mime_type) => {
                trace!(?mime_type, "skipping data row of unknown mime type");
                return;
            }
            known => known,
        };

        self.contacts
            .entry(contact_id)
            .or_insert_with(|| ContactSlot::shell(contact_id));
        let builder = self
            .raw_contacts
            .entry(raw_contact_id)
            .or_insert_with(|| RawContactBuilder::new(raw_contact_id, contact_id));
        builder.set_account(row.account());

        let skip_blank = self.config.skip_blank_data;
        match mime_type {
            MimeType::BuiltIn(kind) => {
                let Some(data) = DataMapper::new(kind, *row).value() else {
                    trace!(%kind, "skipping data row without identity");
                    return;
                };
                if skip_blank && data.is_blank() {
                    trace!(%kind, id = %data.meta().id(), "skipping blank data");
                    return;
                }
                builder.put(data);
            }
            MimeType::Custom(mime_type) => {
                let entry = match self.registry.entry_for(&mime_type) {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!(error = %e, "custom entry vanished during aggregation");
                        return;
                    }
                };
                let Some(entity) = entry.map_row(row) else {
                    trace!(mime_type = %mime_type, "skipping custom row without identity");
                    return;
                };
                if skip_blank && entity.is_blank() {
                    trace!(mime_type = %mime_type, "skipping blank custom data");
                    return;
                }
                if let Err(e) = self.registry.put_into(builder, entity) {
                    debug!(error = %e, "failed to attach custom data");
                }
            }
            MimeType::Unknown(_) => {}
        }
    }

    // ── Phase 2: Contacts rows ───────────────────────────────────

    /// Hydrates contacts from Contacts rows. Contacts that are new or still
    /// shells take the row's attributes; already hydrated contacts are kept.
    pub fn process_contacts_rows(
        &mut self,
        cursor: &mut dyn Cursor,
        include: &Include<ContactsField>,
    ) {
        cursor.reset_position();
        let mut rows = 0usize;
        loop {
            if self.is_cancelled() || !cursor.move_to_next() {
                break;
            }
            let row = ContactsCursor::new(&*cursor, include);
            rows += 1;
            let Some(contact) = ContactMapper::new(row).value() else {
                trace!("skipping contacts row without id");
                continue;
            };
            match self.contacts.entry(contact.id) {
                Entry::Occupied(mut slot) => {
                    let slot = slot.get_mut();
                    if !slot.hydrated {
                        slot.contact = contact;
                        slot.hydrated = true;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(ContactSlot {
                        contact,
                        hydrated: true,
                    });
                }
            }
        }
        debug!(rows, contacts = self.contacts.len(), "processed contacts rows");
    }

    // ── Phase 3: RawContacts rows ────────────────────────────────

    /// Creates blank raw contacts for raw contacts without data, and fills in
    /// missing raw-contact-level attributes of the others.
    pub fn process_raw_contacts_rows(
        &mut self,
        cursor: &mut dyn Cursor,
        include: &Include<RawContactsField>,
    ) {
        cursor.reset_position();
        let mut rows = 0usize;
        loop {
            if self.is_cancelled() || !cursor.move_to_next() {
                break;
            }
            let row = RawContactsCursor::new(&*cursor, include);
            rows += 1;
            let Some(blank) = BlankRawContactMapper::new(row).value() else {
                trace!("skipping raw contacts row without ids");
                continue;
            };
            match self.raw_contacts.entry(blank.id) {
                Entry::Occupied(mut builder) => builder.get_mut().hydrate(blank),
                Entry::Vacant(slot) => {
                    slot.insert(RawContactBuilder::blank(blank));
                }
            }
        }
        debug!(rows, raw_contacts = self.raw_contacts.len(), "processed raw contacts rows");
    }

    // ── Phase 4: join ────────────────────────────────────────────

    /// Joins raw contacts into their contacts and drains all state.
    ///
    /// Contacts keep first-seen order and carry their raw contacts sorted by
    /// id. Raw contacts whose contact was never seen are emitted afterwards
    /// under shell contacts. Returns nothing once cancelled.
    pub fn map_contacts(&mut self) -> Vec<Contact> {
        let Some(mut groups) = self.group_raw_contacts() else {
            return Vec::new();
        };
        let contacts = std::mem::take(&mut self.contacts);

        let mut result = Vec::with_capacity(contacts.len() + groups.len());
        for (id, slot) in contacts {
            if self.is_cancelled() {
                return Vec::new();
            }
            let mut contact = slot.contact;
            contact.raw_contacts = groups.shift_remove(&id).unwrap_or_default();
            result.push(contact);
        }

        let orphans = groups.len();
        for (id, raw_contacts) in groups {
            if self.is_cancelled() {
                return Vec::new();
            }
            result.push(Contact {
                raw_contacts,
                ..Contact::shell(id)
            });
        }

        debug!(contacts = result.len(), orphans, "joined contacts");
        self.finish(result)
    }

    /// Drains all state and returns only the raw contacts, sorted by id.
    pub fn map_raw_contacts(&mut self) -> Vec<RawContact> {
        self.contacts.clear();
        let Some(groups) = self.group_raw_contacts() else {
            return Vec::new();
        };
        let mut raw_contacts: Vec<RawContact> = groups.into_values().flatten().collect();
        raw_contacts.sort_by_key(|raw| raw.id);
        self.finish(raw_contacts)
    }

    fn group_raw_contacts(&mut self) -> Option<IndexMap<ContactId, Vec<RawContact>>> {
        if self.is_cancelled() {
            return None;
        }
        let mut groups: IndexMap<ContactId, Vec<RawContact>> = IndexMap::new();
        for (_, builder) in std::mem::take(&mut self.raw_contacts) {
            if self.is_cancelled() {
                return None;
            }
            groups.entry(builder.contact_id()).or_default().push(builder.build());
        }
        for raw_contacts in groups.values_mut() {
            raw_contacts.sort_by_key(|raw| raw.id);
        }
        Some(groups)
    }

    fn finish<T: Redactable>(&self, items: Vec<T>) -> Vec<T> {
        if self.config.redact {
            items.iter().map(Redactable::redacted_copy).collect()
        } else {
            items
        }
    }
}
