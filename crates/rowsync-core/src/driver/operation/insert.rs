use super::Operation;
use crate::{
    schema::{ColumnId, TableId},
    stmt::Value,
};

#[derive(Debug)]
pub struct Insert {
    /// The table to insert into
    pub table: TableId,

    /// Assigned columns
    pub columns: Vec<ColumnId>,

    /// Values, one per assigned column, in column order
    pub values: Vec<Value>,

    /// Generated-key columns the store must answer back, if any
    pub returning: Option<Vec<ColumnId>>,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
