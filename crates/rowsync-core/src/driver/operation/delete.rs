use super::Operation;
use crate::{schema::TableId, stmt::Filter};

#[derive(Debug)]
pub struct Delete {
    /// The table to delete from
    pub table: TableId,

    /// Which rows to delete
    pub filter: Filter,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
