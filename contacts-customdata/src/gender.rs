//! Gender of a raw contact. At most one per raw contact.

use contacts_cursor::DataCursor;
use contacts_model::{
    CountRestriction, CustomDataContainer, CustomDataEntity, CustomDataField, DataMeta, dyn_eq_as,
    redacted,
};
use contacts_registry::{CustomDataEntry, CustomDataRegistry, RegistryResult};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;

pub const GENDER_MIME_TYPE: &str = "vnd.contacts.customdata.cursor.item/gender";

const TYPE_COLUMN: &str = "data1";
const LABEL_COLUMN: &str = "data2";

/// The gender type column. `Custom` is described by the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GenderType {
    Custom,
    Male,
    Female,
}

impl GenderType {
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            GenderType::Custom => 0,
            GenderType::Male => 1,
            GenderType::Female => 2,
        }
    }

    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(GenderType::Custom),
            1 => Some(GenderType::Male),
            2 => Some(GenderType::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gender {
    pub meta: DataMeta,
    pub gender_type: Option<GenderType>,
    pub label: Option<String>,
    pub is_redacted: bool,
}

impl CustomDataEntity for Gender {
    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn mime_type(&self) -> &str {
        GENDER_MIME_TYPE
    }

    // A type without a label is not blank.
    fn is_blank(&self) -> bool {
        self.gender_type.is_none() && self.label.as_deref().is_none_or(|l| l.trim().is_empty())
    }

    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Arc<dyn CustomDataEntity> {
        Arc::new(Gender {
            label: redacted(&self.label),
            is_redacted: true,
            ..self.clone()
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
pub(crate) struct GenderEntry;

impl GenderEntry {
    pub(crate) fn type_field() -> CustomDataField {
        CustomDataField::new(GENDER_MIME_TYPE, TYPE_COLUMN)
    }

    pub(crate) fn label_field() -> CustomDataField {
        CustomDataField::new(GENDER_MIME_TYPE, LABEL_COLUMN)
    }
}

impl CustomDataEntry for GenderEntry {
    fn mime_type(&self) -> &str {
        GENDER_MIME_TYPE
    }

    fn fields(&self) -> Vec<CustomDataField> {
        vec![Self::type_field(), Self::label_field()]
    }

    fn field_value(
        &self,
        entity: &dyn CustomDataEntity,
        field: &CustomDataField,
    ) -> Option<String> {
        let gender = entity.as_any().downcast_ref::<Gender>()?;
        match field.column_name() {
            _ if field.mime_type() != GENDER_MIME_TYPE => None,
            TYPE_COLUMN => gender.gender_type.map(|t| t.value().to_string()),
            LABEL_COLUMN => gender.label.clone(),
            _ => None,
        }
    }

    fn count_restriction(&self) -> CountRestriction {
        CountRestriction::AtMostOne
    }

    fn map_row(&self, row: &DataCursor<'_>) -> Option<Arc<dyn CustomDataEntity>> {
        let reader = row.reader();
        Some(Arc::new(Gender {
            meta: row.meta()?,
            gender_type: reader
                .long(&Self::type_field().into())
                .and_then(GenderType::from_value),
            label: reader.string(&Self::label_field().into()),
            is_redacted: false,
        }))
    }
}

/// Gender accessors for raw contacts and raw contact builders.
pub trait GenderExt: CustomDataContainer {
    /// The gender, if one was fetched.
    fn gender(&self, registry: &CustomDataRegistry) -> RegistryResult<Option<Gender>> {
        Ok(registry
            .entities_for::<Gender, _>(self, GENDER_MIME_TYPE)?
            .into_iter()
            .next())
    }

    /// Replaces the gender.
    fn set_gender(&mut self, registry: &CustomDataRegistry, gender: Gender) -> RegistryResult<()> {
        registry.put_into(self, Arc::new(gender))
    }

    /// Removes the gender. Returns whether one was present.
    fn remove_gender(&mut self, registry: &CustomDataRegistry) -> RegistryResult<bool> {
        Ok(registry.remove_all_from(self, GENDER_MIME_TYPE)? > 0)
    }
}

impl<C: CustomDataContainer + ?Sized> GenderExt for C {}
