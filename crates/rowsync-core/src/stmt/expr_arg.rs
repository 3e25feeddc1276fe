use super::Expr;

/// A positional parameter placeholder.
///
/// Represents a reference to a parameter value by position. During
/// evaluation (and serialization to a wire placeholder), `arg(n)` is bound
/// to the nth value of the ordered parameter list.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    /// The zero-based position of the argument.
    pub position: usize,
}

impl Expr {
    pub fn arg(expr_arg: impl Into<ExprArg>) -> Self {
        Self::Arg(expr_arg.into())
    }
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg { position }
    }
}

impl From<usize> for ExprArg {
    fn from(value: usize) -> Self {
        Self { position: value }
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
