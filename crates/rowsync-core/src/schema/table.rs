use super::{Column, ColumnId, PrimaryKey};

use std::fmt;

/// A database table
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.columns.is_empty()
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key
            .columns
            .iter()
            .map(|column_id| &self.columns[column_id.index])
    }

    /// Columns stored in the backing table.
    pub fn persistent_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.persistent)
    }

    /// Columns the engine assigns on insert and update: persistent, not
    /// auto-incremented, not store-computed.
    pub fn assignable_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.persistent_columns()
            .filter(|column| !column.auto_increment && !column.computed)
    }

    /// The column set row identity is reconciled on: assignable columns,
    /// i.e. everything the store does not generate itself.
    pub fn reconcile_columns(&self) -> Vec<&Column> {
        self.assignable_columns().collect()
    }

    /// Primary-key columns whose values the store generates on insert.
    pub fn generated_key_columns(&self) -> Vec<&Column> {
        self.primary_key_columns()
            .filter(|column| column.auto_increment)
            .collect()
    }

    pub fn has_computed_columns(&self) -> bool {
        self.columns.iter().any(|column| column.computed)
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
