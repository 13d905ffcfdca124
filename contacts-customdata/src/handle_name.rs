//! Handle names (user names on services without a dedicated data kind).
//! A raw contact may have any number of them.

use contacts_cursor::DataCursor;
use contacts_model::{
    CountRestriction, CustomDataContainer, CustomDataEntity, CustomDataField, DataMeta, dyn_eq_as,
    redacted,
};
use contacts_registry::{CustomDataEntry, CustomDataRegistry, RegistryResult};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;

pub const HANDLE_NAME_MIME_TYPE: &str = "vnd.contacts.customdata.cursor.item/handlename";

const HANDLE_COLUMN: &str = "data1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleName {
    pub meta: DataMeta,
    pub handle: Option<String>,
    pub is_redacted: bool,
}

impl CustomDataEntity for HandleName {
    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn mime_type(&self) -> &str {
        HANDLE_NAME_MIME_TYPE
    }

    fn is_blank(&self) -> bool {
        self.handle.as_deref().is_none_or(|h| h.trim().is_empty())
    }

    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Arc<dyn CustomDataEntity> {
        Arc::new(HandleName {
            meta: self.meta,
            handle: redacted(&self.handle),
            is_redacted: true,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CustomDataEntity) -> bool {
        dyn_eq_as(self, other)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HandleNameEntry;

impl HandleNameEntry {
    pub(crate) fn handle_field() -> CustomDataField {
        CustomDataField::new(HANDLE_NAME_MIME_TYPE, HANDLE_COLUMN)
    }
}

impl CustomDataEntry for HandleNameEntry {
    fn mime_type(&self) -> &str {
        HANDLE_NAME_MIME_TYPE
    }

    fn fields(&self) -> Vec<CustomDataField> {
        vec![Self::handle_field()]
    }

    fn field_value(
        &self,
        entity: &dyn CustomDataEntity,
        field: &CustomDataField,
    ) -> Option<String> {
        let handle_name = entity.as_any().downcast_ref::<HandleName>()?;
        (*field == Self::handle_field())
            .then(|| handle_name.handle.clone())
            .flatten()
    }

    fn count_restriction(&self) -> CountRestriction {
        CountRestriction::NoLimit
    }

    fn map_row(&self, row: &DataCursor<'_>) -> Option<Arc<dyn CustomDataEntity>> {
        Some(Arc::new(HandleName {
            meta: row.meta()?,
            handle: row.reader().string(&Self::handle_field().into()),
            is_redacted: false,
        }))
    }
}

/// Handle name accessors for raw contacts and raw contact builders.
pub trait HandleNameExt: CustomDataContainer {
    fn handle_names(&self, registry: &CustomDataRegistry) -> RegistryResult<Vec<HandleName>> {
        registry.entities_for(self, HANDLE_NAME_MIME_TYPE)
    }

    fn add_handle_name(
        &mut self,
        registry: &CustomDataRegistry,
        handle_name: HandleName,
    ) -> RegistryResult<()> {
        registry.put_into(self, Arc::new(handle_name))
    }

    /// Removes handle names equal to `handle_name`. Returns how many were removed.
    fn remove_handle_name(
        &mut self,
        registry: &CustomDataRegistry,
        handle_name: &HandleName,
    ) -> RegistryResult<usize> {
        let entity: Arc<dyn CustomDataEntity> = Arc::new(handle_name.clone());
        registry.remove_from(self, &entity, false)
    }

    fn remove_all_handle_names(&mut self, registry: &CustomDataRegistry) -> RegistryResult<usize> {
        registry.remove_all_from(self, HANDLE_NAME_MIME_TYPE)
    }
}

impl<C: CustomDataContainer + ?Sized> HandleNameExt for C {}
