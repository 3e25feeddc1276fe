use rowsync_core::stmt::BinaryOp;

/// The operator vocabulary a field filter can carry.
///
/// The four LIKE variants differ only in wildcard placement; see
/// [`Wildcard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,

    /// Pattern taken as given
    Like,

    /// Prefix match: `value%`
    LikePrefix,

    /// Suffix match: `%value`
    LikeSuffix,

    /// Containment: `%value%`
    LikeContains,

    In,
    NotIn,
}

/// How a comparison renders: a plain binary operator, a LIKE pattern with a
/// wildcard placement, or an IN list.
#[derive(Debug, Clone, Copy)]
pub(super) enum Shape {
    Binary(BinaryOp),
    Pattern(Wildcard),
    InList { negate: bool },
}

/// Where `%` lands around a LIKE parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    None,
    Trailing,
    Leading,
    Both,
}

impl CompareOp {
    /// The declarative operator table: every operator maps to its shape,
    /// keeping wildcard placement data rather than branching.
    pub(super) const fn shape(self) -> Shape {
        match self {
            CompareOp::Equal => Shape::Binary(BinaryOp::Eq),
            CompareOp::NotEqual => Shape::Binary(BinaryOp::Ne),
            CompareOp::Less => Shape::Binary(BinaryOp::Lt),
            CompareOp::LessOrEqual => Shape::Binary(BinaryOp::Le),
            CompareOp::Greater => Shape::Binary(BinaryOp::Gt),
            CompareOp::GreaterOrEqual => Shape::Binary(BinaryOp::Ge),
            CompareOp::Like => Shape::Pattern(Wildcard::None),
            CompareOp::LikePrefix => Shape::Pattern(Wildcard::Trailing),
            CompareOp::LikeSuffix => Shape::Pattern(Wildcard::Leading),
            CompareOp::LikeContains => Shape::Pattern(Wildcard::Both),
            CompareOp::In => Shape::InList { negate: false },
            CompareOp::NotIn => Shape::InList { negate: true },
        }
    }
}

impl Wildcard {
    pub fn apply(self, value: &str) -> String {
        match self {
            Wildcard::None => value.to_string(),
            Wildcard::Trailing => format!("{value}%"),
            Wildcard::Leading => format!("%{value}"),
            Wildcard::Both => format!("%{value}%"),
        }
    }
}
