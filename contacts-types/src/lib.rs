//! Core type definitions for the contacts aggregation engine.
//!
//! This crate defines the small, source-agnostic types every other crate
//! depends on:
//! - Row identifiers for the Contacts, RawContacts, Data and Groups sources
//! - Profile id detection
//! - Millisecond [`Timestamp`]s as stored by the contacts provider
//!
//! Entity shapes (contacts, raw contacts, data kinds) live in `contacts-model`.

mod ids;
mod timestamp;

pub use ids::{ContactId, DataId, GroupId, PROFILE_ID_BASE, RawContactId, is_profile_id};
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
