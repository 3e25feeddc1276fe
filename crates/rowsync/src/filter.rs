mod connector;
pub use connector::Connector;

mod op;
pub use op::{CompareOp, Wildcard};

mod value;
pub use value::{FieldFilter, FieldValue};

use op::Shape;

use indexmap::IndexMap;
use rowsync_core::{
    bail,
    schema::Table,
    stmt::{Expr, ExprColumn, Filter, Value},
    Result,
};

/// The outcome of [`build`]: a combined condition (or `None` when no field
/// contributed) and the ordered parameter list matching its placeholders.
#[derive(Debug, Default)]
pub struct Built {
    pub expr: Option<Expr>,
    pub params: Vec<Value>,
}

impl Built {
    pub fn into_filter(self) -> Option<Filter> {
        self.expr.map(|expr| Filter::new(expr, self.params))
    }
}

/// Builds a combined condition from named, operator-tagged field values.
///
/// `connector` must be `AND` or `OR`, case-insensitively. Field names
/// resolve against the table's columns when one is given; unknown names
/// become bare name-only column references. Fields without a value are
/// skipped entirely. `In`/`NotIn` over a many-valued field expand to one
/// placeholder per element; the LIKE family wraps the parameter in `%`
/// wildcards per the operator's placement before parameterizing.
pub fn build(
    connector: &str,
    fields: &IndexMap<String, FieldFilter>,
    table: Option<&Table>,
) -> Result<Built> {
    let connector = Connector::parse(connector)?;

    let mut expr: Option<Expr> = None;
    let mut params: Vec<Value> = vec![];

    for (name, field) in fields {
        if field.value.is_empty() {
            continue;
        }

        let column = match table.and_then(|table| table.column_by_name(name)) {
            Some(column) => ExprColumn::from(column),
            None => ExprColumn::new(name.as_str()),
        };

        let condition = match field.op.shape() {
            Shape::InList { negate } => {
                let mut placeholders = vec![];
                for element in field.value.elements() {
                    placeholders.push(Expr::arg(params.len()));
                    params.push(element.clone());
                }
                let list = Expr::list_from_vec(placeholders);
                if negate {
                    Expr::not_in_list(column, list)
                } else {
                    Expr::in_list(column, list)
                }
            }
            Shape::Pattern(wildcard) => {
                let FieldValue::Single(value) = &field.value else {
                    bail!("field `{name}` has a many-valued input but a pattern operator");
                };
                let pattern = match value {
                    Value::String(value) => Value::String(wildcard.apply(value)),
                    value => value.clone(),
                };
                let condition = Expr::like(column, Expr::arg(params.len()));
                params.push(pattern);
                condition
            }
            Shape::Binary(op) => {
                let FieldValue::Single(value) = &field.value else {
                    bail!("field `{name}` has a many-valued input but a scalar operator");
                };
                let condition = Expr::binary_op(column, op, Expr::arg(params.len()));
                params.push(value.clone());
                condition
            }
        };

        expr = Some(match expr {
            Some(prior) => connector.combine(prior, condition),
            None => condition,
        });
    }

    Ok(Built { expr, params })
}
