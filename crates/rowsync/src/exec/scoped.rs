use rowsync_core::{
    driver::{Connection, DataSource},
    Result,
};

use tracing::warn;

/// A store connection whose lifetime is bounded by the operation that
/// acquired it.
///
/// `Owned` connections were opened here and are closed on drop, on every
/// exit path; a close failure is logged, never raised. `Borrowed`
/// connections belong to the caller and are never closed: whoever opened a
/// connection closes it.
#[derive(Debug)]
pub enum Scoped<'a> {
    Borrowed(&'a mut dyn Connection),
    Owned(Box<dyn Connection>),
}

impl<'a> Scoped<'a> {
    /// Reuses the caller's connection when one is supplied, otherwise opens
    /// a new one against `source`.
    pub fn acquire(
        existing: Option<&'a mut dyn Connection>,
        source: &dyn DataSource,
    ) -> Result<Scoped<'a>> {
        match existing {
            Some(connection) => Ok(Scoped::Borrowed(connection)),
            None => Ok(Scoped::Owned(source.connect()?)),
        }
    }

    pub fn connection(&mut self) -> &mut dyn Connection {
        match self {
            Scoped::Borrowed(connection) => &mut **connection,
            Scoped::Owned(connection) => connection.as_mut(),
        }
    }
}

impl Drop for Scoped<'_> {
    fn drop(&mut self) {
        if let Scoped::Owned(connection) = self {
            if let Err(err) = connection.close() {
                warn!("failed to close store connection: {err}");
            }
        }
    }
}
