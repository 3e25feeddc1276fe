mod step;
pub use step::WriteStep;

use rowsync_core::{
    driver::operation::{Delete, Insert, Update},
    row::KeyValues,
    schema::Table,
    stmt::Filter,
    Error, Result, Row,
};

/// An ordered list of store write operations compiled from a diff.
///
/// Steps execute strictly in order; inserts precede updates precede deletes
/// within one compiled plan. Callers needing a different relative order
/// compile the groups separately and concatenate.
#[derive(Debug, Default)]
pub struct WritePlan {
    pub steps: Vec<WriteStep>,
}

impl WritePlan {
    /// Compiles the full plan for one table: inserts for `added`, updates
    /// for `changed`, deletes for `deleted`.
    pub fn compile(
        table: &Table,
        added: &[Row],
        changed: &[Row],
        deleted: &[Row],
    ) -> Result<WritePlan> {
        let mut plan = Self::compile_inserts(table, added)?;
        plan.extend(Self::compile_updates(table, changed)?);
        plan.extend(Self::compile_deletes(table, deleted)?);
        Ok(plan)
    }

    /// Compiles one insert per added row.
    ///
    /// Every assignable column is set, values in column order. When the
    /// table declares generated key columns, the insert requests them back
    /// and the step is paired with the row's index for key write-back.
    pub fn compile_inserts(table: &Table, added: &[Row]) -> Result<WritePlan> {
        require_primary_key(table)?;

        let columns: Vec<_> = table.assignable_columns().collect();
        let generated: Vec<_> = table.generated_key_columns();

        let steps = added
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let op = Insert {
                    table: table.id,
                    columns: columns.iter().map(|column| column.id).collect(),
                    values: columns.iter().map(|column| row.get(column).clone()).collect(),
                    returning: if generated.is_empty() {
                        None
                    } else {
                        Some(generated.iter().map(|column| column.id).collect())
                    },
                };
                WriteStep {
                    op: op.into(),
                    write_back: Some(index),
                }
            })
            .collect();

        Ok(WritePlan { steps })
    }

    /// Compiles one update per changed row, keyed on the primary key.
    pub fn compile_updates(table: &Table, changed: &[Row]) -> Result<WritePlan> {
        require_primary_key(table)?;

        let columns: Vec<_> = table.assignable_columns().collect();

        let steps = changed
            .iter()
            .map(|row| {
                let op = Update {
                    table: table.id,
                    assignments: columns.iter().map(|column| column.id).collect(),
                    values: columns.iter().map(|column| row.get(column).clone()).collect(),
                    filter: key_filter(table, row),
                };
                WriteStep {
                    op: op.into(),
                    write_back: None,
                }
            })
            .collect();

        Ok(WritePlan { steps })
    }

    /// Compiles one delete per deleted row, keyed on the primary key.
    pub fn compile_deletes(table: &Table, deleted: &[Row]) -> Result<WritePlan> {
        require_primary_key(table)?;

        let steps = deleted
            .iter()
            .map(|row| {
                let op = Delete {
                    table: table.id,
                    filter: key_filter(table, row),
                };
                WriteStep {
                    op: op.into(),
                    write_back: None,
                }
            })
            .collect();

        Ok(WritePlan { steps })
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Appends another plan's steps after this plan's.
    ///
    /// Write-back indices keep referring to the row slice each group was
    /// compiled from, so only plans compiled over the same added slice (or
    /// without write-backs) may be merged.
    pub fn extend(&mut self, other: WritePlan) {
        self.steps.extend(other.steps);
    }
}

/// AND-ed equality over every primary-key column, one placeholder per
/// column, parameters taken from the row.
fn key_filter(table: &Table, row: &Row) -> Filter {
    let key_columns: Vec<_> = table.primary_key_columns().collect();
    Filter::by_key(&KeyValues::of(row, &key_columns))
}

fn require_primary_key(table: &Table) -> Result<()> {
    if table.has_primary_key() {
        Ok(())
    } else {
        Err(Error::no_primary_key(table.name.as_str()))
    }
}
