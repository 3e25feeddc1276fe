use super::Error;

/// Error when many-to-many resolution finds more than one candidate detail
/// table for a junction table.
///
/// Ambiguity is reported, never guessed around: the caller must disambiguate
/// the relationship model.
#[derive(Debug)]
pub(super) struct AmbiguousRelationshipError {
    pub(super) junction: Box<str>,
    pub(super) owner: Box<str>,
    pub(super) candidates: Vec<Box<str>>,
}

impl std::error::Error for AmbiguousRelationshipError {}

impl core::fmt::Display for AmbiguousRelationshipError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "junction table `{}` links `{}` to more than one detail table: ",
            self.junction, self.owner
        )?;
        let mut it = self.candidates.iter().peekable();
        while let Some(candidate) = it.next() {
            write!(f, "`{candidate}`")?;
            if it.peek().is_some() {
                f.write_str(", ")?;
            }
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a junction table with multiple detail-side relations.
    pub fn ambiguous_relationship(
        junction: impl Into<Box<str>>,
        owner: impl Into<Box<str>>,
        candidates: Vec<Box<str>>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousRelationship(
            AmbiguousRelationshipError {
                junction: junction.into(),
                owner: owner.into(),
                candidates,
            },
        ))
    }

    /// Returns `true` if this error is an ambiguous-relationship error.
    pub fn is_ambiguous_relationship(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousRelationship(_))
    }
}
