use rowsync_core::{stmt::Expr, Error, Result};

use std::str::FromStr;

/// How per-field conditions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// Parses `AND` / `OR`, case-insensitively. Anything else fails with an
    /// invalid-connector error.
    pub fn parse(token: &str) -> Result<Connector> {
        if token.eq_ignore_ascii_case("and") {
            Ok(Connector::And)
        } else if token.eq_ignore_ascii_case("or") {
            Ok(Connector::Or)
        } else {
            Err(Error::invalid_connector(token))
        }
    }

    pub fn combine(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            Connector::And => Expr::and(lhs, rhs),
            Connector::Or => Expr::or(lhs, rhs),
        }
    }
}

impl FromStr for Connector {
    type Err = Error;

    fn from_str(token: &str) -> Result<Connector> {
        Connector::parse(token)
    }
}
