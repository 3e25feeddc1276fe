mod scoped;
pub use scoped::Scoped;

use crate::plan::WritePlan;
use rowsync_core::{
    bail,
    driver::{operation::Transaction, Connection, Operation},
    Result, Row, Schema,
};

use tracing::{debug, warn};

/// Executes a compiled write plan on one connection, strictly in plan
/// order.
///
/// After a successful insert that requested generated keys, the key values
/// are written back into the paired row of `added` before the next step
/// runs, and the row transitions from new to existing. Any step failure
/// aborts immediately with the store's error; rolling back is the
/// enclosing transaction's responsibility.
pub fn execute(
    schema: &Schema,
    plan: WritePlan,
    added: &mut [Row],
    connection: &mut dyn Connection,
) -> Result<()> {
    debug!(steps = plan.len(), "executing write plan");

    for step in plan.steps {
        match step.op {
            Operation::Insert(insert) => {
                let returning = insert.returning.clone();
                let response = connection.exec(schema, insert.into())?;

                let Some(index) = step.write_back else {
                    continue;
                };
                let row = &mut added[index];

                if let Some(returning) = returning {
                    let Some(keys) = response.generated_keys() else {
                        bail!("store did not answer the requested generated keys");
                    };
                    let table = schema.table(row.table());
                    for (column_id, value) in returning.iter().zip(keys) {
                        row.write_back(table.column(*column_id), value);
                    }
                }

                row.mark_synchronized();
            }
            op => {
                connection.exec(schema, op)?;
            }
        }
    }

    Ok(())
}

/// Runs `body` between an implicit begin and commit on `connection`.
///
/// On error the transaction is rolled back (best-effort; a rollback failure
/// is logged, never raised over the original error) and the body's error is
/// returned unmodified.
pub fn transaction<T>(
    connection: &mut dyn Connection,
    schema: &Schema,
    body: impl FnOnce(&mut dyn Connection) -> Result<T>,
) -> Result<T> {
    connection.exec(schema, Transaction::Start.into())?;

    match body(connection) {
        Ok(value) => {
            connection.exec(schema, Transaction::Commit.into())?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = connection.exec(schema, Transaction::Rollback.into()) {
                warn!("rollback failed after write error: {rollback_err}");
            }
            Err(err)
        }
    }
}
