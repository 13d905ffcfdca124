//! One-call aggregation over up to three row streams.

use crate::aggregator::ContactsAggregator;
use crate::config::AggregatorConfig;
use contacts_cursor::Cursor;
use contacts_model::{Contact, DataField, Include};
use contacts_registry::CustomDataRegistry;

/// The row streams of one query. Any of them may be absent.
#[derive(Default)]
pub struct RowStreams<'c> {
    pub data: Option<&'c mut dyn Cursor>,
    pub contacts: Option<&'c mut dyn Cursor>,
    pub raw_contacts: Option<&'c mut dyn Cursor>,
}

/// Runs every phase in order and returns the joined contacts.
///
/// `include` is the Data include set; the Contacts and RawContacts streams
/// are read with its projections onto those sources. Returns an empty list
/// when `cancel` fires at any point.
pub fn aggregate(
    registry: &CustomDataRegistry,
    config: AggregatorConfig,
    include: &Include<DataField>,
    streams: RowStreams<'_>,
    cancel: impl Fn() -> bool,
) -> Vec<Contact> {
    let mut aggregator = ContactsAggregator::new(registry, config).with_cancel(cancel);

    if let Some(data) = streams.data {
        aggregator.process_data_rows(data, include);
    }
    if let Some(contacts) = streams.contacts {
        aggregator.process_contacts_rows(contacts, &include.only_contacts_fields());
    }
    if let Some(raw_contacts) = streams.raw_contacts {
        aggregator.process_raw_contacts_rows(raw_contacts, &include.only_raw_contacts_fields());
    }
    aggregator.map_contacts()
}
