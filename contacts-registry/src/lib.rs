//! Open registry of custom data kinds.
//!
//! Built-in kinds are a closed enum in `contacts-model`. Everything else is
//! described by a [`CustomDataEntry`] registered in a [`CustomDataRegistry`],
//! which is the only extension point of the engine.

mod entry;
mod error;
mod registry;

pub use entry::{CustomDataEntry, DataOperation, EntryRegistration, OperationKind};
pub use error::{RegistryError, RegistryResult};
pub use registry::CustomDataRegistry;
