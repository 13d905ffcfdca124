//! Shared test helpers for registry tests.

#![allow(dead_code)]

use contacts_cursor::DataCursor;
use contacts_model::{
    CountRestriction, CustomDataEntity, CustomDataField, DataMeta, dyn_eq_as, redacted,
};
use contacts_registry::CustomDataEntry;
use contacts_types::{ContactId, DataId, RawContactId};
use std::any::Any;
use std::sync::Arc;

pub const MOOD: &str = "vnd.example.cursor.item/mood";
pub const TAG: &str = "vnd.example.cursor.item/tag";

/// A custom entity with one string value.
#[derive(Debug, Clone, PartialEq)]
pub struct Labelled {
    pub mime_type: &'static str,
    pub meta: DataMeta,
    pub value: Option<String>,
    pub is_redacted: bool,
}

impl CustomDataEntity for Labelled {
    fn meta(&self) -> &DataMeta {
        &self.meta
    }

    fn mime_type(&self) -> &str {
        self.mime_type
    }

    fn is_blank(&self) -> bool {
        self.value.as_deref().is_none_or(|v| v.trim().is_empty())
    }

    fn is_redacted(&self) -> bool {
        self.is_redacted
    }

    fn redacted_copy(&self) -> Arc<dyn CustomDataEntity> {
        Arc::new(Labelled {
            value: redacted(&self.value),
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

/// Entry for [`Labelled`] entities stored in `data1`.
#[derive(Debug)]
pub struct LabelledEntry {
    pub mime_type: &'static str,
    pub count_restriction: CountRestriction,
}

impl LabelledEntry {
    pub fn mood() -> Self {
        Self {
            mime_type: MOOD,
            count_restriction: CountRestriction::AtMostOne,
        }
    }

    pub fn tag() -> Self {
        Self {
            mime_type: TAG,
            count_restriction: CountRestriction::NoLimit,
        }
    }

    pub fn value_field(&self) -> CustomDataField {
        CustomDataField::new(self.mime_type, "data1")
    }
}

impl CustomDataEntry for LabelledEntry {
    fn mime_type(&self) -> &str {
        self.mime_type
    }

    fn fields(&self) -> Vec<CustomDataField> {
        vec![self.value_field()]
    }

    fn field_value(
        &self,
        entity: &dyn CustomDataEntity,
        field: &CustomDataField,
    ) -> Option<String> {
        let entity = entity.as_any().downcast_ref::<Labelled>()?;
        (field == &self.value_field()).then(|| entity.value.clone()).flatten()
    }

    fn count_restriction(&self) -> CountRestriction {
        self.count_restriction
    }

    fn map_row(&self, row: &DataCursor<'_>) -> Option<Arc<dyn CustomDataEntity>> {
        Some(Arc::new(Labelled {
            mime_type: self.mime_type,
            meta: row.meta()?,
            value: row.reader().string(&self.value_field().into()),
            is_redacted: false,
        }))
    }
}

pub fn labelled(mime_type: &'static str, id: i64, value: &str) -> Arc<dyn CustomDataEntity> {
    Arc::new(Labelled {
        mime_type,
        meta: DataMeta::new(
            DataId::new(id),
            RawContactId::new(5),
            ContactId::new(10),
            false,
            false,
        ),
        value: Some(value.to_owned()),
        is_redacted: false,
    })
}
