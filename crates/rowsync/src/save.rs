mod link_change;
pub use link_change::LinkChange;

use crate::{
    exec::{execute, transaction, Scoped},
    links::Linker,
    plan::WritePlan,
};
use indexmap::IndexMap;
use rowsync_core::{
    bail,
    driver::{operation::Query, Connection, DataSource, Rows},
    row::KeyValues,
    schema::{Table, TableId},
    stmt::{Filter, Value},
    Result, Row, Schema,
};

/// Where a save stands: `Idle` until the first call, `Saving` while a call
/// is in flight, then `Committed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Committed,
    Failed,
}

/// The top-level entry point a bound form saves through.
///
/// Decides insert-vs-update for the master row, coordinates the master
/// write with every registered many-to-many link change in one transaction,
/// and refreshes store-computed columns after a successful update.
#[derive(Debug)]
pub struct Save<'a> {
    schema: &'a Schema,
    source: &'a dyn DataSource,
    table: TableId,
    links: Vec<LinkChange>,
    synchronize: bool,
    state: SaveState,
}

impl<'a> Save<'a> {
    pub fn new(schema: &'a Schema, source: &'a dyn DataSource, table: TableId) -> Self {
        Save {
            schema,
            source,
            table,
            links: vec![],
            synchronize: true,
            state: SaveState::Idle,
        }
    }

    /// Registers a link change to synchronize together with the master row.
    pub fn link(mut self, change: LinkChange) -> Self {
        self.links.push(change);
        self
    }

    /// Whether link changes are synchronized to the store. On by default;
    /// when off, only the master row is written and no transaction is
    /// opened.
    pub fn synchronize(mut self, synchronize: bool) -> Self {
        self.synchronize = synchronize;
        self
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    /// Saves the bound row, or, when no row is bound, inserts a fresh row
    /// built from the available field values and returns it.
    ///
    /// A bound row with durable identity is updated; a new row is inserted
    /// and receives its generated keys. With link changes present and
    /// synchronization on, the master write and every link change run in
    /// one all-or-nothing transaction; on failure the row is left exactly
    /// as it was.
    pub fn save(
        &mut self,
        row: Option<&mut Row>,
        fields: &IndexMap<String, Value>,
    ) -> Result<Option<Row>> {
        self.state = SaveState::Saving;

        let result = match row {
            Some(row) => self.save_row(row).map(|()| None),
            None => self.save_fresh(fields).map(Some),
        };

        self.state = match &result {
            Ok(_) => SaveState::Committed,
            Err(_) => SaveState::Failed,
        };
        result
    }

    fn save_fresh(&self, fields: &IndexMap<String, Value>) -> Result<Row> {
        let table = self.schema.table(self.table);

        let mut row = Row::new(table);
        for (name, value) in fields {
            if let Some(column) = table.column_by_name(name) {
                row.set(column, value.clone());
            }
        }

        self.save_row(&mut row)?;
        Ok(row)
    }

    fn save_row(&self, row: &mut Row) -> Result<()> {
        let table = self.schema.table(self.table);
        let was_new = row.is_new();

        let mut scoped = Scoped::acquire(None, self.source)?;

        if self.synchronize && !self.links.is_empty() {
            // The master write must land first so junction rows can project
            // its (possibly just generated) key values.
            let snapshot = row.clone();
            let outcome = transaction(scoped.connection(), self.schema, |connection| {
                write_master(self.schema, table, row, was_new, connection)?;
                self.apply_links(row, connection)
            });
            if outcome.is_err() {
                *row = snapshot;
                return outcome;
            }
        } else {
            write_master(self.schema, table, row, was_new, scoped.connection())?;
        }

        if !was_new && table.has_computed_columns() {
            self.reload(table, row, scoped.connection())?;
        }

        Ok(())
    }

    fn apply_links(&self, master: &Row, connection: &mut dyn Connection) -> Result<()> {
        let linker = Linker::new(self.schema, self.source);

        for change in &self.links {
            match change {
                LinkChange::Add { junction, details } => {
                    linker.add_links(*junction, master, details, Some(&mut *connection))?;
                }
                LinkChange::Remove { junction, details } => {
                    linker.remove_links(*junction, master, details, Some(&mut *connection))?;
                }
                LinkChange::RemoveAll { junction } => {
                    linker.remove_all_links(*junction, master, Some(&mut *connection))?;
                }
            }
        }

        Ok(())
    }

    /// Re-reads the row so in-memory values reflect store-side computation.
    fn reload(&self, table: &Table, row: &mut Row, connection: &mut dyn Connection) -> Result<()> {
        let key_columns: Vec<_> = table.primary_key_columns().collect();
        let key = KeyValues::of(row, &key_columns);

        let columns: Vec<_> = table.persistent_columns().collect();
        let op = Query {
            table: table.id,
            columns: columns.iter().map(|column| column.id).collect(),
            filter: Some(Filter::by_key(&key)),
        };

        let response = connection.exec(self.schema, op.into())?;
        let records = match response.rows {
            Rows::Values(records) => records,
            Rows::Count(_) => vec![],
        };

        let Some(record) = records.into_iter().next() else {
            bail!("row vanished from table `{}` during reload", table.name);
        };

        for (column, value) in columns.iter().zip(record) {
            row.write_back(column, value);
        }
        row.mark_synchronized();

        Ok(())
    }
}

fn write_master(
    schema: &Schema,
    table: &Table,
    row: &mut Row,
    insert: bool,
    connection: &mut dyn Connection,
) -> Result<()> {
    if insert {
        let plan = WritePlan::compile_inserts(table, std::slice::from_ref(row))?;
        execute(schema, plan, std::slice::from_mut(row), connection)
    } else {
        let plan = WritePlan::compile_updates(table, std::slice::from_ref(row))?;
        execute(schema, plan, &mut [], connection)?;
        row.mark_synchronized();
        Ok(())
    }
}
