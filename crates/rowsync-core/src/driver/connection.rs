use super::{Operation, Response};
use crate::{schema::Schema, Result};

use std::fmt::Debug;

/// A live, exclusive handle to the backing store.
///
/// Every store interaction blocks until complete; the engine executes one
/// operation at a time per connection. Transactions are driven through
/// [`Operation::Transaction`] on the same connection.
///
/// Ownership decides closing responsibility: whoever opened the connection
/// closes it. [`close`](Connection::close) allows an eager, best-effort
/// close before drop.
pub trait Connection: Debug {
    /// Execute a store operation.
    fn exec(&mut self, schema: &Schema, op: Operation) -> Result<Response>;

    /// Release the underlying store handle.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
