//! Row cursor adapters for the contacts aggregation engine.
//!
//! Rows come from up to three sources (Contacts, RawContacts, Data). This
//! crate turns a positioned [`Cursor`] into typed, nullable values:
//! - [`EntityCursor`] reads one field at a time, gated by an [`Include`] set
//! - [`DataCursor`], [`ContactsCursor`] and [`RawContactsCursor`] know where
//!   each source keeps its ids ([`ContactIdCursor`], [`RawContactIdCursor`])
//! - [`EntityMapper`]s read a whole row as an entity
//!
//! [`Include`]: contacts_model::Include

mod cursor;
mod error;
mod mappers;
mod reader;
mod sources;
mod value;

pub use cursor::{Cursor, MemoryCursor};
pub use error::{CursorError, CursorResult};
pub use mappers::{BlankRawContactMapper, ContactMapper, DataMapper, EntityMapper, OptionsMapper};
pub use reader::EntityCursor;
pub use sources::{
    ContactIdCursor, ContactsCursor, DataCursor, RawContactIdCursor, RawContactsCursor,
};
pub use value::Value;
