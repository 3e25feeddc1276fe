use super::*;
use crate::row::KeyValues;

/// A boolean condition paired with the ordered parameter list its `Arg`
/// placeholders index into.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub expr: Expr,
    pub params: Vec<Value>,
}

impl Filter {
    pub fn new(expr: impl Into<Expr>, params: Vec<Value>) -> Self {
        Filter {
            expr: expr.into(),
            params,
        }
    }

    /// A filter matching rows whose columns equal the given key values,
    /// AND-ed in key order, one placeholder per column.
    pub fn by_key(key: &KeyValues) -> Self {
        let mut operands = Vec::with_capacity(key.len());
        let mut params = Vec::with_capacity(key.len());

        for (name, value) in key.entries() {
            operands.push(Expr::eq(
                ExprColumn::new(name.as_str()),
                Expr::arg(params.len()),
            ));
            params.push(value.clone());
        }

        Filter {
            expr: Expr::and_from_vec(operands),
            params,
        }
    }
}
