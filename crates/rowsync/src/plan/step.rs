use rowsync_core::driver::Operation;

/// One step of a write plan.
#[derive(Debug)]
pub struct WriteStep {
    /// The store operation to execute
    pub op: Operation,

    /// For inserts: the index of the originating row in the added slice,
    /// used to write store-generated keys back. Updates and deletes carry
    /// no back-reference.
    pub write_back: Option<usize>,
}
