mod key_values;
pub use key_values::KeyValues;

use crate::schema::{Column, Table, TableId};
use crate::stmt::Value;

/// One in-memory record bound to a table schema.
///
/// Values are aligned to the table's column order; the column set never
/// changes after creation. Mutating a value marks the row dirty until the
/// next successful synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    table: TableId,
    values: Vec<Value>,
    status: RowStatus,
    dirty: bool,
}

/// Row lifecycle: `New` until the store has acknowledged the row (and handed
/// back any generated keys), `Existing` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    New,
    Existing,
}

impl Row {
    /// A fresh all-null row pending insertion.
    pub fn new(table: &Table) -> Row {
        Row {
            table: table.id,
            values: vec![Value::Null; table.columns.len()],
            status: RowStatus::New,
            dirty: false,
        }
    }

    /// A row read from the store.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not match the table's column count.
    pub fn existing(table: &Table, values: Vec<Value>) -> Row {
        assert_eq!(
            values.len(),
            table.columns.len(),
            "row width does not match table `{}`",
            table.name
        );
        Row {
            table: table.id,
            values,
            status: RowStatus::Existing,
            dirty: false,
        }
    }

    pub fn table(&self) -> TableId {
        self.table
    }

    pub fn status(&self) -> RowStatus {
        self.status
    }

    pub fn is_new(&self) -> bool {
        self.status == RowStatus::New
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[track_caller]
    pub fn get(&self, column: &Column) -> &Value {
        assert_eq!(column.id.table, self.table, "column belongs to another table");
        &self.values[column.id.index]
    }

    #[track_caller]
    pub fn set(&mut self, column: &Column, value: impl Into<Value>) {
        assert_eq!(column.id.table, self.table, "column belongs to another table");
        self.values[column.id.index] = value.into();
        self.dirty = true;
    }

    /// Writes a store-generated value back without dirtying the row.
    #[track_caller]
    pub fn write_back(&mut self, column: &Column, value: Value) {
        assert_eq!(column.id.table, self.table, "column belongs to another table");
        self.values[column.id.index] = value;
    }

    /// Marks the row as durably stored: `Existing` and clean.
    pub fn mark_synchronized(&mut self) {
        self.status = RowStatus::Existing;
        self.dirty = false;
    }
}
