//! Registry entries: everything the engine needs to know about one custom
//! data kind.

use crate::registry::CustomDataRegistry;
use contacts_cursor::DataCursor;
use contacts_model::{CountRestriction, CustomDataEntity, CustomDataField, DataField, Include};
use contacts_types::{DataId, RawContactId};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Describes one custom data kind.
pub trait CustomDataEntry: fmt::Debug + Send + Sync + 'static {
    /// The value stored in the Data source's `mimetype` column.
    fn mime_type(&self) -> &str;

    /// Every field of this kind.
    fn fields(&self) -> Vec<CustomDataField>;

    /// The stored string form of `field` on `entity`, for matching and writes.
    /// `None` when the entity is not of this kind or has no value.
    fn field_value(
        &self,
        entity: &dyn CustomDataEntity,
        field: &CustomDataField,
    ) -> Option<String>;

    fn count_restriction(&self) -> CountRestriction;

    /// Reads the current Data row as an entity of this kind. The row view is
    /// bound to the caller's include set, so excluded fields read as `None`.
    /// Returns `None` when the row lacks identity columns.
    fn map_row(&self, row: &DataCursor<'_>) -> Option<Arc<dyn CustomDataEntity>>;

    /// Builds the write operation that brings the stored row in line with
    /// `entity`: a delete when the entity is blank, otherwise an update of the
    /// included fields only.
    fn operation(
        &self,
        entity: &dyn CustomDataEntity,
        include: &Include<DataField>,
    ) -> DataOperation {
        let data_id = entity.meta().id();
        if entity.is_blank() {
            return DataOperation {
                mime_type: self.mime_type().to_owned(),
                kind: OperationKind::Delete { data_id },
                values: Vec::new(),
            };
        }
        DataOperation {
            mime_type: self.mime_type().to_owned(),
            kind: OperationKind::Update { data_id },
            values: included_values(self, entity, include),
        }
    }

    /// Builds the insert operation adding `entity` to a raw contact. Blank
    /// entities are not inserted.
    fn insert_operation(
        &self,
        raw_contact_id: RawContactId,
        entity: &dyn CustomDataEntity,
        include: &Include<DataField>,
    ) -> Option<DataOperation> {
        if entity.is_blank() {
            return None;
        }
        Some(DataOperation {
            mime_type: self.mime_type().to_owned(),
            kind: OperationKind::Insert { raw_contact_id },
            values: included_values(self, entity, include),
        })
    }
}

fn included_values<E: CustomDataEntry + ?Sized>(
    entry: &E,
    entity: &dyn CustomDataEntity,
    include: &Include<DataField>,
) -> Vec<(String, Option<String>)> {
    let mut values: Vec<_> = entry
        .fields()
        .into_iter()
        .filter(|field| include.contains(&DataField::from(field.clone())))
        .map(|field| (field.column_name().to_owned(), entry.field_value(entity, &field)))
        .collect();
    values.sort();
    values
}

/// What a [`DataOperation`] does to the Data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OperationKind {
    Insert { raw_contact_id: RawContactId },
    Update { data_id: DataId },
    Delete { data_id: DataId },
}

/// A write against one Data row, restricted to the included columns.
///
/// Applying it is the write layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataOperation {
    pub mime_type: String,
    pub kind: OperationKind,
    /// Column name and new value, sorted by column. `None` clears the column.
    pub values: Vec<(String, Option<String>)>,
}

/// Registers one or more entries. Lets a module keep its entry types private
/// and expose only this hook.
pub trait EntryRegistration {
    fn register_to(&self, registry: &CustomDataRegistry) -> crate::RegistryResult<()>;
}
