use super::*;

#[derive(Debug, PartialEq)]
pub struct PrimaryKey {
    /// Columns composing the primary key
    pub columns: Vec<ColumnId>,
}
