use super::Expr;
use crate::schema::Column;

/// A reference to a column of the statement's target table, by name.
///
/// Every operation in this engine targets exactly one table, so no scope or
/// join bookkeeping is needed. Name-based references also allow conditions
/// over fields that are not declared schema columns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExprColumn {
    /// The name of the referenced column.
    pub name: String,
}

impl Expr {
    pub fn column(column: impl Into<ExprColumn>) -> Self {
        column.into().into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl ExprColumn {
    pub fn new(name: impl Into<String>) -> Self {
        ExprColumn { name: name.into() }
    }
}

impl From<&Column> for ExprColumn {
    fn from(value: &Column) -> Self {
        ExprColumn {
            name: value.name.clone(),
        }
    }
}

impl From<&str> for ExprColumn {
    fn from(value: &str) -> Self {
        ExprColumn::new(value)
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
