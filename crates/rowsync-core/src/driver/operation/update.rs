use super::Operation;
use crate::{
    schema::{ColumnId, TableId},
    stmt::{Filter, Value},
};

#[derive(Debug)]
pub struct Update {
    /// The table to update
    pub table: TableId,

    /// Assigned columns
    pub assignments: Vec<ColumnId>,

    /// Values, one per assigned column, in column order
    pub values: Vec<Value>,

    /// Which rows to update
    pub filter: Filter,
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
