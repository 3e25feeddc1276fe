mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod query;
pub use query::Query;

mod transaction;
pub use transaction::Transaction;

mod update;
pub use update::Update;

/// One pending store operation.
///
/// Write operations are created by the plan compiler, consumed exactly once
/// by the executor, and discarded after execution.
#[derive(Debug)]
pub enum Operation {
    Delete(Delete),
    Insert(Insert),
    Query(Query),
    Transaction(Transaction),
    Update(Update),
}
