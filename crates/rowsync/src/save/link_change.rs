use rowsync_core::{schema::TableId, Row};

/// One many-to-many change registered with a [`Save`](super::Save).
#[derive(Debug)]
pub enum LinkChange {
    /// Link the detail rows to the master (idempotent).
    Add { junction: TableId, details: Vec<Row> },

    /// Unlink exactly the given detail rows.
    Remove { junction: TableId, details: Vec<Row> },

    /// Unlink every detail row of the master.
    RemoveAll { junction: TableId },
}
