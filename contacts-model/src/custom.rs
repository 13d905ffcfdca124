//! Custom (registry-driven) data entities and the holder that attaches them
//! to a raw contact.

use crate::data::DataMeta;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// How many entities of one kind a raw contact may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountRestriction {
    /// Zero or one. Putting a second entity replaces the first.
    AtMostOne,
    /// Zero or more. Putting an entity appends it.
    NoLimit,
}

/// A single row of a custom data kind.
///
/// Implementations are plain value types owned by the module that defines
/// the kind; the engine only sees them through this trait.
pub trait CustomDataEntity: fmt::Debug + Send + Sync + 'static {
    /// Identity and primary flags of the row.
    fn meta(&self) -> &DataMeta;

    /// The custom mime type value of this kind.
    fn mime_type(&self) -> &str;

    /// True when every non-identity field is absent or empty.
    fn is_blank(&self) -> bool;

    fn is_redacted(&self) -> bool;

    /// Returns a copy with private user data masked.
    fn redacted_copy(&self) -> Arc<dyn CustomDataEntity>;

    fn as_any(&self) -> &dyn Any;

    /// Structural equality against another (possibly differently typed) entity.
    /// Usually implemented with [`dyn_eq_as`].
    fn dyn_eq(&self, other: &dyn CustomDataEntity) -> bool;
}

/// Structural equality helper for [`CustomDataEntity::dyn_eq`]: true when
/// `other` is a `T` equal to `this`.
pub fn dyn_eq_as<T: PartialEq + 'static>(this: &T, other: &dyn CustomDataEntity) -> bool {
    other.as_any().downcast_ref::<T>().is_some_and(|other| other == this)
}

/// The custom entities of one mime type attached to a raw contact, together
/// with the count restriction that governs how new entities are merged in.
#[derive(Debug, Clone)]
pub struct CustomDataEntityHolder {
    entities: Vec<Arc<dyn CustomDataEntity>>,
    count_restriction: CountRestriction,
}

impl CustomDataEntityHolder {
    pub fn new(count_restriction: CountRestriction) -> Self {
        Self {
            entities: Vec::new(),
            count_restriction,
        }
    }

    #[must_use]
    pub fn count_restriction(&self) -> CountRestriction {
        self.count_restriction
    }

    #[must_use]
    pub fn entities(&self) -> &[Arc<dyn CustomDataEntity>] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Puts an entity into the holder. `AtMostOne` replaces whatever is there,
    /// `NoLimit` appends.
    pub fn put(&mut self, entity: Arc<dyn CustomDataEntity>) {
        match self.count_restriction {
            CountRestriction::AtMostOne => {
                self.entities.clear();
                self.entities.push(entity);
            }
            CountRestriction::NoLimit => self.entities.push(entity),
        }
    }

    /// Removes every entity matching `entity`. With `by_identity` only the
    /// exact same allocation matches; otherwise structurally equal entities do.
    /// Returns the number of removed entities.
    pub fn remove(&mut self, entity: &Arc<dyn CustomDataEntity>, by_identity: bool) -> usize {
        let before = self.entities.len();
        self.entities.retain(|existing| {
            if by_identity {
                !Arc::ptr_eq(existing, entity)
            } else {
                !existing.dyn_eq(entity.as_ref())
            }
        });
        before - self.entities.len()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Returns a holder with every entity redacted.
    #[must_use]
    pub fn redacted_copy(&self) -> Self {
        Self {
            entities: self.entities.iter().map(|e| e.redacted_copy()).collect(),
            count_restriction: self.count_restriction,
        }
    }
}

impl PartialEq for CustomDataEntityHolder {
    fn eq(&self, other: &Self) -> bool {
        self.count_restriction == other.count_restriction
            && self.entities.len() == other.entities.len()
            && self
                .entities
                .iter()
                .zip(&other.entities)
                .all(|(a, b)| a.dyn_eq(b.as_ref()))
    }
}

/// Anything that carries a mime type → holder map of custom data.
pub trait CustomDataContainer {
    fn custom_data(&self) -> &BTreeMap<String, CustomDataEntityHolder>;

    fn custom_data_mut(&mut self) -> &mut BTreeMap<String, CustomDataEntityHolder>;
}
