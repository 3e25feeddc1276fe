pub mod diff;
pub use diff::{diff, Diff};

pub mod exec;
pub use exec::{execute, transaction, Scoped};

pub mod filter;
pub use filter::{CompareOp, Connector, FieldFilter, FieldValue};

pub mod links;
pub use links::Linker;

pub mod plan;
pub use plan::{WritePlan, WriteStep};

pub mod save;
pub use save::{LinkChange, Save, SaveState};

pub use rowsync_core::{driver, row, schema, stmt, Connection, Error, Result, Row, Schema};
