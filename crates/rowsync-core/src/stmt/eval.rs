use super::{BinaryOp, Expr, ExprPattern, Value};
use crate::{bail, Result};

use std::cmp::Ordering;

/// Provides the values an expression references during evaluation: `Arg`
/// placeholders by position and columns by name.
pub trait Input {
    fn arg(&mut self, position: usize) -> Result<Value>;

    fn column(&mut self, name: &str) -> Result<Value>;
}

/// Input over the parameter list alone; column references fail.
pub struct ConstInput<'a> {
    args: &'a [Value],
}

impl<'a> ConstInput<'a> {
    pub fn new(args: &'a [Value]) -> Self {
        ConstInput { args }
    }
}

impl Input for ConstInput<'_> {
    fn arg(&mut self, position: usize) -> Result<Value> {
        match self.args.get(position) {
            Some(value) => Ok(value.clone()),
            None => bail!("parameter {position} out of bounds"),
        }
    }

    fn column(&mut self, _name: &str) -> Result<Value> {
        bail!("expression references a column in a constant context")
    }
}

impl Expr {
    /// Evaluates the expression to a value.
    ///
    /// Boolean nodes evaluate with row-identity semantics: equality is
    /// type-aware value equality (null equals null), comparisons between
    /// incomparable values are false.
    pub fn eval(&self, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                for operand in expr_and {
                    if !operand.eval_bool(input)? {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            Expr::Or(expr_or) => {
                for operand in expr_or {
                    if operand.eval_bool(input)? {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
            Expr::Arg(expr_arg) => input.arg(expr_arg.position),
            Expr::Column(expr_column) => input.column(&expr_column.name),
            Expr::Value(value) => Ok(value.clone()),
            Expr::List(expr_list) => {
                let mut items = Vec::with_capacity(expr_list.items.len());
                for item in &expr_list.items {
                    items.push(item.eval(input)?);
                }
                Ok(Value::List(items))
            }
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval(input)?;
                let rhs = expr_binary_op.rhs.eval(input)?;
                Ok(Value::Bool(eval_binary_op(expr_binary_op.op, &lhs, &rhs)))
            }
            Expr::InList(expr_in_list) => {
                let needle = expr_in_list.expr.eval(input)?;
                let list = match expr_in_list.list.eval(input)? {
                    Value::List(items) => items,
                    value => vec![value],
                };
                let found = list.iter().any(|item| needle.compares_eq(item));
                Ok(Value::Bool(found != expr_in_list.negate))
            }
            Expr::IsNull(expr_is_null) => {
                let value = expr_is_null.expr.eval(input)?;
                Ok(Value::Bool(value.is_null() != expr_is_null.negate))
            }
            Expr::Pattern(ExprPattern::Like(expr_like)) => {
                let value = expr_like.expr.eval(input)?;
                let pattern = expr_like.pattern.eval(input)?;
                match (&value, &pattern) {
                    (Value::String(value), Value::String(pattern)) => {
                        Ok(Value::Bool(like_match(pattern, value)))
                    }
                    (Value::Null, _) => Ok(Value::Bool(false)),
                    _ => bail!("LIKE requires string operands"),
                }
            }
        }
    }

    pub fn eval_bool(&self, input: &mut impl Input) -> Result<bool> {
        match self.eval(input)? {
            Value::Bool(value) => Ok(value),
            value => bail!("expected boolean expression; value={value:#?}"),
        }
    }
}

fn eval_binary_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> bool {
    match op {
        BinaryOp::Eq => lhs.compares_eq(rhs),
        BinaryOp::Ne => !lhs.compares_eq(rhs),
        BinaryOp::Ge => matches!(
            lhs.compares_ord(rhs),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        BinaryOp::Gt => matches!(lhs.compares_ord(rhs), Some(Ordering::Greater)),
        BinaryOp::Le => matches!(lhs.compares_ord(rhs), Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Lt => matches!(lhs.compares_ord(rhs), Some(Ordering::Less)),
    }
}

/// Matches a LIKE pattern whose only wildcard is `%`.
fn like_match(pattern: &str, value: &str) -> bool {
    let segments: Vec<&str> = pattern.split('%').collect();

    match segments.as_slice() {
        [exact] => value == *exact,
        [prefix, rest @ .., suffix] => {
            if !value.starts_with(prefix) {
                return false;
            }
            let mut remaining = &value[prefix.len()..];

            for segment in rest {
                if segment.is_empty() {
                    continue;
                }
                match remaining.find(segment) {
                    Some(at) => remaining = &remaining[at + segment.len()..],
                    None => return false,
                }
            }

            remaining.len() >= suffix.len() && remaining.ends_with(suffix)
        }
        [] => value.is_empty(),
    }
}
