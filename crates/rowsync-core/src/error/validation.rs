use super::Error;

/// Error raised by collaborators validating rows before synchronization.
///
/// The engine never produces this itself; it only propagates it unmodified.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) message: Box<str>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "validation failed: {}", self.message)
    }
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
