use super::Error;

/// Error from the backing store while executing a write plan.
#[derive(Debug)]
pub(super) struct WriteError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for WriteError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a store failure.
    ///
    /// This is the preferred way to convert store-specific errors into
    /// rowsync errors. The store's native error stays reachable through
    /// [`std::error::Error::source`].
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Write(WriteError {
            inner: Box::new(err),
        }))
    }

    /// Creates a store failure from a plain message.
    pub fn write_msg(message: impl Into<String>) -> Error {
        Error::write(StoreMessage(message.into()))
    }

    /// Returns `true` if this error is a store write error.
    pub fn is_write(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Write(_))
    }
}

#[derive(Debug)]
struct StoreMessage(String);

impl std::error::Error for StoreMessage {}

impl core::fmt::Display for StoreMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
