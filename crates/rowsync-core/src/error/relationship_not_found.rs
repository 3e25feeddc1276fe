use super::Error;

/// Error when many-to-many resolution finds no relation pairing a junction
/// table with a detail table.
#[derive(Debug)]
pub(super) struct RelationshipNotFoundError {
    pub(super) junction: Box<str>,
    pub(super) owner: Box<str>,
}

impl std::error::Error for RelationshipNotFoundError {}

impl core::fmt::Display for RelationshipNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no relationship links junction table `{}` to a detail table (owner: `{}`)",
            self.junction, self.owner
        )
    }
}

impl Error {
    /// Creates an error for a junction table with no detail-side relation.
    pub fn relationship_not_found(
        junction: impl Into<Box<str>>,
        owner: impl Into<Box<str>>,
    ) -> Error {
        Error::from(super::ErrorKind::RelationshipNotFound(
            RelationshipNotFoundError {
                junction: junction.into(),
                owner: owner.into(),
            },
        ))
    }

    /// Returns `true` if this error is a relationship-not-found error.
    pub fn is_relationship_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RelationshipNotFound(_))
    }
}
