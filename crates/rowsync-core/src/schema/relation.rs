use super::{ColumnId, TableId};

/// A named, directed association between two tables, expressed as a pair of
/// equal-length column lists.
///
/// Direction follows the foreign key: `from` carries the referencing
/// columns, `to` the referenced ones. Graph queries treat relations as
/// undirected; self-loops are excluded from many-to-many resolution.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Name of the relation (unique within the schema)
    pub name: String,

    /// The referencing table
    pub from: TableId,

    /// The referenced table
    pub to: TableId,

    /// Referencing columns, on `from`
    pub from_columns: Vec<ColumnId>,

    /// Referenced columns, on `to`
    pub to_columns: Vec<ColumnId>,
}

impl Relation {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    pub fn touches(&self, table: TableId) -> bool {
        self.from == table || self.to == table
    }

    pub fn connects(&self, lhs: TableId, rhs: TableId) -> bool {
        (self.from == lhs && self.to == rhs) || (self.from == rhs && self.to == lhs)
    }

    /// The table on the opposite side of `table`.
    ///
    /// # Panics
    ///
    /// Panics if the relation does not touch `table`.
    #[track_caller]
    pub fn other_side(&self, table: TableId) -> TableId {
        if self.from == table {
            self.to
        } else if self.to == table {
            self.from
        } else {
            panic!("relation `{}` does not touch the given table", self.name)
        }
    }

    /// The relation's columns on the `table` side.
    #[track_caller]
    pub fn columns_on(&self, table: TableId) -> &[ColumnId] {
        if self.from == table {
            &self.from_columns
        } else if self.to == table {
            &self.to_columns
        } else {
            panic!("relation `{}` does not touch the given table", self.name)
        }
    }

    /// The relation's columns on the side opposite `table`.
    #[track_caller]
    pub fn columns_opposite(&self, table: TableId) -> &[ColumnId] {
        self.columns_on(self.other_side(table))
    }
}
