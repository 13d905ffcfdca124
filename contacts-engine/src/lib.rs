//! Contact aggregation engine.
//!
//! Reconstructs `Contact → RawContact → data` graphs from flat row streams:
//! - [`ContactsAggregator`] processes Data, Contacts and RawContacts rows
//!   phase by phase and joins them
//! - [`aggregate`] runs all phases over a [`RowStreams`] bundle
//! - [`AggregatorConfig`] holds the tunables, optionally loaded from TOML
//!
//! The engine is synchronous and owned by a single call. Custom data kinds
//! are resolved through a borrowed [`CustomDataRegistry`](contacts_registry::CustomDataRegistry).

mod aggregator;
mod config;
mod error;
mod streams;

pub use aggregator::ContactsAggregator;
pub use config::AggregatorConfig;
pub use error::ConfigError;
pub use streams::{RowStreams, aggregate};
