//! The row cursor contract and an owned, in-memory implementation.

use crate::error::{CursorError, CursorResult};
use crate::value::Value;
use rusqlite::{Connection, Params};
use std::collections::HashMap;
use tracing::debug;

/// A forward-only view over the rows of one source.
///
/// Reads never fail: a column missing from the projection, or a cursor that
/// is not positioned on a row, yields `None`.
pub trait Cursor {
    /// Column names of the projection, in source order.
    fn columns(&self) -> &[String];

    /// The value of `column` in the current row.
    fn get(&self, column: &str) -> Option<&Value>;

    /// Advances to the next row. Returns `false` once past the last row.
    fn move_to_next(&mut self) -> bool;

    /// Moves back to before the first row.
    fn reset_position(&mut self);

    /// Number of rows.
    fn count(&self) -> usize;
}

/// An owned row set.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCursor {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Value>>,
    position: Option<usize>,
}

impl MemoryCursor {
    /// An empty cursor over `columns`.
    pub fn new<I, S>(columns: I) -> CursorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if index.insert(column.clone(), i).is_some() {
                return Err(CursorError::DuplicateColumn(column.clone()));
            }
        }
        Ok(Self {
            columns,
            index,
            rows: Vec::new(),
            position: None,
        })
    }

    /// Appends a row. Values are matched to columns by position.
    pub fn push_row(&mut self, row: Vec<Value>) -> CursorResult<()> {
        if row.len() != self.columns.len() {
            return Err(CursorError::RowWidth {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder-style [`MemoryCursor::push_row`].
    pub fn with_row(mut self, row: Vec<Value>) -> CursorResult<Self> {
        self.push_row(row)?;
        Ok(self)
    }

    /// Runs `sql` against `conn` and loads every resulting row.
    pub fn from_query<P: Params>(conn: &Connection, sql: &str, params: P) -> CursorResult<Self> {
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(str::to_owned).collect();
        let width = columns.len();
        let mut cursor = Self::new(columns)?;

        let mut rows = stmt.query(params)?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(Value::from(row.get_ref(i)?));
            }
            cursor.rows.push(values);
        }

        debug!(rows = cursor.rows.len(), columns = width, "loaded cursor from query");
        Ok(cursor)
    }

    /// True when the cursor currently points at a row.
    #[must_use]
    pub fn is_positioned(&self) -> bool {
        self.position.is_some_and(|p| p < self.rows.len())
    }
}

impl Cursor for MemoryCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn get(&self, column: &str) -> Option<&Value> {
        let row = self.rows.get(self.position?)?;
        row.get(*self.index.get(column)?)
    }

    fn move_to_next(&mut self) -> bool {
        let next = self.position.map_or(0, |p| p.saturating_add(1));
        if next < self.rows.len() {
            self.position = Some(next);
            true
        } else {
            self.position = Some(self.rows.len());
            false
        }
    }

    fn reset_position(&mut self) {
        self.position = None;
    }

    fn count(&self) -> usize {
        self.rows.len()
    }
}
