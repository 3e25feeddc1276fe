use super::Error;

/// Error when a write plan targets a table that declares no primary key.
///
/// Updates and deletes are keyed on the primary key, and inserted rows need
/// an identity to receive generated keys, so compilation refuses the table
/// outright.
#[derive(Debug)]
pub(super) struct NoPrimaryKeyError {
    pub(super) table: Box<str>,
}

impl std::error::Error for NoPrimaryKeyError {}

impl core::fmt::Display for NoPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` does not declare a primary key", self.table)
    }
}

impl Error {
    /// Creates an error for a table without a primary key.
    pub fn no_primary_key(table: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::NoPrimaryKey(NoPrimaryKeyError {
            table: table.into(),
        }))
    }

    /// Returns `true` if this error is a missing-primary-key error.
    pub fn is_no_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoPrimaryKey(_))
    }
}
