//! The custom data registry.
//!
//! Readers take a lock-free snapshot of the entry map; writers clone it,
//! modify the clone and swap it in under a mutex, so a reader always sees
//! either the whole old map or the whole new one.

use crate::entry::CustomDataEntry;
use crate::error::{RegistryError, RegistryResult};
use arc_swap::ArcSwap;
use contacts_model::{
    CustomDataContainer, CustomDataEntity, CustomDataEntityHolder, CustomDataField, DataField,
    DataKind, Include, MimeType,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

type EntryMap = HashMap<String, Arc<dyn CustomDataEntry>>;

/// Mime type → entry map for custom data kinds. `Send + Sync`; share it by
/// reference or in an `Arc`.
pub struct CustomDataRegistry {
    entries: ArcSwap<EntryMap>,
    writer: Mutex<()>,
}

impl CustomDataRegistry {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(HashMap::new()),
            writer: Mutex::new(()),
        }
    }

    /// Registers `entry`, replacing any entry with the same mime type.
    pub fn register(&self, entry: impl CustomDataEntry) -> RegistryResult<()> {
        self.register_arc(Arc::new(entry))
    }

    pub fn register_arc(&self, entry: Arc<dyn CustomDataEntry>) -> RegistryResult<()> {
        let mime_type = entry.mime_type().to_owned();
        if DataKind::from_value(&mime_type).is_some() {
            warn!(mime_type = %mime_type, "refusing to register a built-in mime type");
            return Err(RegistryError::BuiltInMimeType(mime_type));
        }

        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = EntryMap::clone(&self.entries.load());
        let replaced = next.insert(mime_type.clone(), entry).is_some();
        self.entries.store(Arc::new(next));

        if replaced {
            info!(mime_type = %mime_type, "replaced custom data entry");
        } else {
            debug!(mime_type = %mime_type, "registered custom data entry");
        }
        Ok(())
    }

    /// Runs a module's registration hook against this registry.
    pub fn register_all(&self, registration: &dyn crate::EntryRegistration) -> RegistryResult<()> {
        registration.register_to(self)
    }

    /// Removes the entry for `mime_type`. Returns whether one was registered.
    pub fn unregister(&self, mime_type: &str) -> bool {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = EntryMap::clone(&self.entries.load());
        let removed = next.remove(mime_type).is_some();
        if removed {
            self.entries.store(Arc::new(next));
            debug!(mime_type, "unregistered custom data entry");
        }
        removed
    }

    pub fn entry_for(&self, mime_type: &str) -> RegistryResult<Arc<dyn CustomDataEntry>> {
        self.entries
            .load()
            .get(mime_type)
            .cloned()
            .ok_or_else(|| RegistryError::MissingRegistration(mime_type.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, mime_type: &str) -> bool {
        self.entries.load().contains_key(mime_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// Registered mime types, sorted.
    #[must_use]
    pub fn mime_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.entries.load().keys().cloned().collect();
        types.sort();
        types
    }

    /// Classifies a stored mime type value. Built-in kinds win over custom
    /// registrations.
    #[must_use]
    pub fn resolve(&self, value: Option<&str>) -> MimeType {
        match value {
            None => MimeType::Unknown(None),
            Some(value) => match DataKind::from_value(value) {
                Some(kind) => MimeType::BuiltIn(kind),
                None if self.contains(value) => MimeType::Custom(value.to_owned()),
                None => MimeType::Unknown(Some(value.to_owned())),
            },
        }
    }

    /// Every field of every registered entry.
    #[must_use]
    pub fn all_fields(&self) -> Vec<CustomDataField> {
        let snapshot = self.entries.load();
        let mut fields: Vec<CustomDataField> =
            snapshot.values().flat_map(|entry| entry.fields()).collect();
        fields.sort();
        fields
    }

    /// The mime type of the entry that owns `field`.
    pub fn mime_type_of(&self, field: &CustomDataField) -> RegistryResult<String> {
        let entry = self.entries.load().get(field.mime_type()).cloned();
        match entry {
            Some(entry) if entry.fields().contains(field) => Ok(entry.mime_type().to_owned()),
            _ => Err(RegistryError::UnknownField {
                mime_type: field.mime_type().to_owned(),
                column: field.column_name().to_owned(),
            }),
        }
    }

    /// An include set with every built-in field and every registered custom
    /// field.
    #[must_use]
    pub fn include_all_fields(&self) -> Include<DataField> {
        Include::all_data_fields(self.all_fields())
    }

    /// Adds `entity` to the container following its entry's count
    /// restriction: at-most-one kinds are cleared first, no-limit kinds append.
    pub fn put_into<C: CustomDataContainer + ?Sized>(
        &self,
        container: &mut C,
        entity: Arc<dyn CustomDataEntity>,
    ) -> RegistryResult<()> {
        let mime_type = entity.mime_type().to_owned();
        let entry = self.entry_for(&mime_type)?;
        container
            .custom_data_mut()
            .entry(mime_type)
            .or_insert_with(|| CustomDataEntityHolder::new(entry.count_restriction()))
            .put(entity);
        Ok(())
    }

    /// Removes matching entities of `entity`'s kind from the container. With
    /// `by_identity` only the same allocation matches; otherwise structurally
    /// equal entities do. Returns the number removed.
    pub fn remove_from<C: CustomDataContainer + ?Sized>(
        &self,
        container: &mut C,
        entity: &Arc<dyn CustomDataEntity>,
        by_identity: bool,
    ) -> RegistryResult<usize> {
        let mime_type = entity.mime_type();
        self.entry_for(mime_type)?;
        Ok(container
            .custom_data_mut()
            .get_mut(mime_type)
            .map_or(0, |holder| holder.remove(entity, by_identity)))
    }

    /// Removes every entity of `mime_type` from the container. Returns the
    /// number removed.
    pub fn remove_all_from<C: CustomDataContainer + ?Sized>(
        &self,
        container: &mut C,
        mime_type: &str,
    ) -> RegistryResult<usize> {
        self.entry_for(mime_type)?;
        Ok(container
            .custom_data_mut()
            .get_mut(mime_type)
            .map_or(0, |holder| {
                let removed = holder.len();
                holder.clear();
                removed
            }))
    }

    /// The container's entities of `mime_type`, downcast to `T`. Entities of
    /// another concrete type are skipped. Empty when the kind was never
    /// populated.
    pub fn entities_for<T, C>(&self, container: &C, mime_type: &str) -> RegistryResult<Vec<T>>
    where
        T: Clone + 'static,
        C: CustomDataContainer + ?Sized,
    {
        self.entry_for(mime_type)?;
        Ok(container
            .custom_data()
            .get(mime_type)
            .map(|holder| {
                holder
                    .entities()
                    .iter()
                    .filter_map(|e| e.as_any().downcast_ref::<T>().cloned())
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl Default for CustomDataRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CustomDataRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDataRegistry")
            .field("mime_types", &self.mime_types())
            .finish()
    }
}
