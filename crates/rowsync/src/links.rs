mod resolve;
pub use resolve::{resolve, ResolvedLink};

use crate::{
    exec::{execute, Scoped},
    plan::WritePlan,
};
use rowsync_core::{
    driver::{operation::Query, Connection, DataSource, Rows},
    row::KeyValues,
    schema::{Table, TableId},
    stmt::Filter,
    Result, Row, Schema,
};

/// Synchronizes many-to-many links through a junction table.
///
/// Every operation resolves the junction's detail side via [`resolve`],
/// reads the master's existing junction rows, and compiles the difference
/// into a write plan executed on one connection. Operations that receive no
/// connection open a scoped one and close it on exit.
#[derive(Debug)]
pub struct Linker<'a> {
    schema: &'a Schema,
    source: &'a dyn DataSource,
}

impl<'a> Linker<'a> {
    pub fn new(schema: &'a Schema, source: &'a dyn DataSource) -> Self {
        Linker { schema, source }
    }

    /// Links the detail rows to the master row, skipping links that already
    /// exist. Calling this twice with the same inputs is a no-op the second
    /// time.
    pub fn add_links(
        &self,
        junction: TableId,
        master: &Row,
        details: &[Row],
        connection: Option<&mut dyn Connection>,
    ) -> Result<()> {
        let link = resolve(self.schema, junction, master.table())?;
        let mut scoped = Scoped::acquire(connection, self.source)?;

        let master_key = KeyValues::project(master, link.master, self.schema);
        let existing = self.query_junction(link.junction, &master_key, scoped.connection())?;

        let mut added: Vec<Row> = vec![];

        for detail in details {
            let detail_key = KeyValues::project(detail, link.detail, self.schema);

            // An unselected detail row projects to all-null keys; skip it.
            if detail_key.entries().all(|(_, value)| value.is_null()) {
                continue;
            }

            let linked = existing
                .iter()
                .chain(added.iter())
                .any(|row| detail_key.matches_row(row, link.junction));
            if linked {
                continue;
            }

            let mut row = Row::new(link.junction);
            populate(&mut row, link.junction, &master_key);
            populate(&mut row, link.junction, &detail_key);
            added.push(row);
        }

        let plan = WritePlan::compile_inserts(link.junction, &added)?;
        execute(self.schema, plan, &mut added, scoped.connection())
    }

    /// Unlinks exactly the junction rows matching at least one of the given
    /// detail rows.
    pub fn remove_links(
        &self,
        junction: TableId,
        master: &Row,
        details: &[Row],
        connection: Option<&mut dyn Connection>,
    ) -> Result<()> {
        let link = resolve(self.schema, junction, master.table())?;
        let mut scoped = Scoped::acquire(connection, self.source)?;

        let master_key = KeyValues::project(master, link.master, self.schema);
        let existing = self.query_junction(link.junction, &master_key, scoped.connection())?;

        let detail_keys: Vec<KeyValues> = details
            .iter()
            .map(|detail| KeyValues::project(detail, link.detail, self.schema))
            .collect();

        let deleted: Vec<Row> = existing
            .into_iter()
            .filter(|row| {
                detail_keys
                    .iter()
                    .any(|key| key.matches_row(row, link.junction))
            })
            .collect();

        let plan = WritePlan::compile_deletes(link.junction, &deleted)?;
        execute(self.schema, plan, &mut [], scoped.connection())
    }

    /// Unlinks every junction row of the master. Rows of other masters are
    /// untouched.
    pub fn remove_all_links(
        &self,
        junction: TableId,
        master: &Row,
        connection: Option<&mut dyn Connection>,
    ) -> Result<()> {
        let link = resolve(self.schema, junction, master.table())?;
        let mut scoped = Scoped::acquire(connection, self.source)?;

        let master_key = KeyValues::project(master, link.master, self.schema);
        let deleted = self.query_junction(link.junction, &master_key, scoped.connection())?;

        let plan = WritePlan::compile_deletes(link.junction, &deleted)?;
        execute(self.schema, plan, &mut [], scoped.connection())
    }

    /// Builds a junction working copy from the detail-side owner snapshot:
    /// one junction row per owner row, populated with both key projections
    /// and any link-derived (non-persistent) junction columns copied from
    /// the owner row by name.
    ///
    /// Returns the working rows together with the positional indices of
    /// owner rows that are already linked in the store, for callers seeding
    /// displayed selection state.
    pub fn fill_from_owner(
        &self,
        junction: TableId,
        master: &Row,
        owner_rows: &[Row],
        connection: Option<&mut dyn Connection>,
    ) -> Result<(Vec<Row>, Vec<usize>)> {
        let link = resolve(self.schema, junction, master.table())?;
        let mut scoped = Scoped::acquire(connection, self.source)?;

        let master_key = KeyValues::project(master, link.master, self.schema);
        let existing = self.query_junction(link.junction, &master_key, scoped.connection())?;

        let mut working = Vec::with_capacity(owner_rows.len());
        let mut linked = vec![];

        for (index, owner_row) in owner_rows.iter().enumerate() {
            let owner_table = self.schema.table(owner_row.table());
            let detail_key = KeyValues::project(owner_row, link.detail, self.schema);

            let mut row = Row::new(link.junction);
            populate(&mut row, link.junction, &master_key);
            populate(&mut row, link.junction, &detail_key);

            for column in &link.junction.columns {
                if column.persistent {
                    continue;
                }
                if let Some(owner_column) = owner_table.column_by_name(&column.name) {
                    row.set(column, owner_row.get(owner_column).clone());
                }
            }

            if existing
                .iter()
                .any(|existing_row| detail_key.matches_row(existing_row, link.junction))
            {
                linked.push(index);
            }

            working.push(row);
        }

        Ok((working, linked))
    }

    /// Reads the master's junction rows over the table's persistent columns.
    fn query_junction(
        &self,
        junction: &Table,
        master_key: &KeyValues,
        connection: &mut dyn Connection,
    ) -> Result<Vec<Row>> {
        let columns: Vec<_> = junction.persistent_columns().collect();

        let op = Query {
            table: junction.id,
            columns: columns.iter().map(|column| column.id).collect(),
            filter: Some(Filter::by_key(master_key)),
        };

        let response = connection.exec(self.schema, op.into())?;
        let records = match response.rows {
            Rows::Values(records) => records,
            Rows::Count(_) => vec![],
        };

        Ok(records
            .into_iter()
            .map(|record| {
                let mut row = Row::new(junction);
                for (column, value) in columns.iter().zip(record) {
                    row.write_back(column, value);
                }
                row.mark_synchronized();
                row
            })
            .collect())
    }
}

/// Copies the key set into the row, matching columns by name.
fn populate(row: &mut Row, table: &Table, key: &KeyValues) {
    for (name, value) in key.entries() {
        if let Some(column) = table.column_by_name(name) {
            row.set(column, value.clone());
        }
    }
}
