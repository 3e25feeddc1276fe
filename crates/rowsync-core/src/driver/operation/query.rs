use super::Operation;
use crate::{
    schema::{ColumnId, TableId},
    stmt::Filter,
};

#[derive(Debug)]
pub struct Query {
    /// The table to read
    pub table: TableId,

    /// Columns to return, in order
    pub columns: Vec<ColumnId>,

    /// Which rows to return; `None` reads the whole table
    pub filter: Option<Filter>,
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
