//! Reference custom data kinds.
//!
//! Each kind is a [`CustomDataEntity`](contacts_model::CustomDataEntity)
//! plus a private registry entry. Register both with
//! [`CustomDataRegistration`]:
//!
//! ```ignore
//! let registry = CustomDataRegistry::new();
//! registry.register_all(&CustomDataRegistration)?;
//! ```

mod gender;
mod handle_name;

pub use gender::{GENDER_MIME_TYPE, Gender, GenderExt, GenderType};
pub use handle_name::{HANDLE_NAME_MIME_TYPE, HandleName, HandleNameExt};

use contacts_model::CustomDataField;
use contacts_registry::{CustomDataRegistry, EntryRegistration, RegistryResult};
use gender::GenderEntry;
use handle_name::HandleNameEntry;
use tracing::debug;

/// Registers the gender and handle name kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomDataRegistration;

impl EntryRegistration for CustomDataRegistration {
    fn register_to(&self, registry: &CustomDataRegistry) -> RegistryResult<()> {
        registry.register(GenderEntry)?;
        registry.register(HandleNameEntry)?;
        debug!("registered gender and handle name kinds");
        Ok(())
    }
}

/// Fields of the gender kind, for building include sets.
#[must_use]
pub fn gender_fields() -> Vec<CustomDataField> {
    vec![GenderEntry::type_field(), GenderEntry::label_field()]
}

/// Fields of the handle name kind, for building include sets.
#[must_use]
pub fn handle_name_fields() -> Vec<CustomDataField> {
    vec![HandleNameEntry::handle_field()]
}
