use super::Connection;
use crate::Result;

use std::fmt::Debug;

/// Opens connections against a backing store.
pub trait DataSource: Debug {
    /// Open a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}
