//! Typed, include-gated field readers over a positioned cursor.

use crate::cursor::Cursor;
use crate::value::Value;
use contacts_model::{Field, Include};
use contacts_types::Timestamp;
use tracing::trace;

/// Reads typed values of fields of type `F` from the cursor's current row.
///
/// Every read returns `None` when the field is neither included nor
/// required, when the projection lacks the column, when the stored value is
/// NULL, or when the stored value cannot be converted. Reads never move the
/// cursor.
pub struct EntityCursor<'a, F: Field> {
    cursor: &'a dyn Cursor,
    include: &'a Include<F>,
}

impl<F: Field> Clone for EntityCursor<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Field> Copy for EntityCursor<'_, F> {}

impl<'a, F: Field> EntityCursor<'a, F> {
    pub fn new(cursor: &'a dyn Cursor, include: &'a Include<F>) -> Self {
        Self { cursor, include }
    }

    #[must_use]
    pub fn include(&self) -> &'a Include<F> {
        self.include
    }

    fn value(&self, field: &F) -> Option<&'a Value> {
        if !self.include.allows(field) {
            return None;
        }
        self.cursor.get(field.column_name()).filter(|v| !v.is_null())
    }

    pub fn string(&self, field: &F) -> Option<String> {
        self.value(field)?.as_string()
    }

    pub fn long(&self, field: &F) -> Option<i64> {
        let value = self.value(field)?;
        let parsed = value.as_i64();
        if parsed.is_none() {
            trace!(column = field.column_name(), ?value, "value is not an integer");
        }
        parsed
    }

    pub fn int(&self, field: &F) -> Option<i32> {
        i32::try_from(self.long(field)?).ok()
    }

    /// `1` is true; any other integer is false.
    pub fn boolean(&self, field: &F) -> Option<bool> {
        self.long(field).map(|v| v == 1)
    }

    /// Milliseconds since the epoch. Zero and negative values read as `None`.
    pub fn timestamp(&self, field: &F) -> Option<Timestamp> {
        Timestamp::from_millis(self.long(field)?)
    }

    /// An opaque URI string. Empty strings read as `None`.
    pub fn uri(&self, field: &F) -> Option<String> {
        self.string(field).filter(|s| !s.trim().is_empty())
    }

    pub fn blob(&self, field: &F) -> Option<Vec<u8>> {
        self.value(field)?.as_blob().map(<[u8]>::to_vec)
    }

    /// A row id wrapped in its typed newtype.
    pub fn id<T: From<i64>>(&self, field: &F) -> Option<T> {
        self.long(field).map(T::from)
    }
}
