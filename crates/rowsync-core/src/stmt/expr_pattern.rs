use super::ExprLike;

#[derive(Debug, Clone, PartialEq)]
pub enum ExprPattern {
    Like(ExprLike),
}
