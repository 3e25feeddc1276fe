use indexmap::IndexMap;
use rowsync_core::{
    driver::{operation::{Delete, Insert, Query, Update}, Response},
    schema::{Table, TableId},
    stmt::{Filter, Input, Type, Value},
    Error, Result, Schema,
};

/// The shared table catalog behind every connection of one [`Memory`]
/// driver.
///
/// Cloning snapshots the whole catalog; transactions roll back by restoring
/// such a snapshot.
#[derive(Debug, Clone, Default)]
pub(crate) struct Store {
    tables: IndexMap<TableId, TableData>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TableData {
    pub(crate) rows: Vec<Vec<Value>>,
    next_key: i64,
}

impl Store {
    pub(crate) fn table_mut(&mut self, table: TableId) -> &mut TableData {
        self.tables.entry(table).or_default()
    }

    pub(crate) fn insert(
        &mut self,
        schema: &Schema,
        op: Insert,
    ) -> Result<Response> {
        let table = schema.table(op.table);
        let data = self.table_mut(op.table);

        let mut record = vec![Value::Null; table.columns.len()];
        for (column_id, value) in op.columns.iter().zip(op.values) {
            record[column_id.index] = value;
        }

        // Fill store-generated key columns the caller left unassigned.
        for column in table.primary_key_columns() {
            if !column.auto_increment || !record[column.id.index].is_null() {
                continue;
            }
            data.next_key += 1;
            record[column.id.index] = match column.ty {
                Type::I32 => Value::I32(data.next_key as i32),
                Type::I64 => Value::I64(data.next_key),
                Type::String => Value::String(uuid::Uuid::new_v4().to_string()),
                _ => {
                    return Err(Error::write(StoreError::new(format!(
                        "cannot generate a key for column `{}.{}`",
                        table.name, column.name
                    ))))
                }
            };
        }

        let duplicate = table.has_primary_key()
            && data.rows.iter().any(|row| {
                table
                    .primary_key_columns()
                    .all(|column| row[column.id.index].compares_eq(&record[column.id.index]))
            });
        if duplicate {
            return Err(Error::write(StoreError::new(format!(
                "duplicate primary key in table `{}`",
                table.name
            ))));
        }

        let response = match &op.returning {
            Some(returning) => Response::values(vec![returning
                .iter()
                .map(|column_id| record[column_id.index].clone())
                .collect()]),
            None => Response::count(1),
        };

        data.rows.push(record);
        Ok(response)
    }

    pub(crate) fn update(
        &mut self,
        schema: &Schema,
        op: Update,
    ) -> Result<Response> {
        let table = schema.table(op.table);
        let data = self.table_mut(op.table);

        let mut count = 0;
        for row in &mut data.rows {
            if !matches(table, row, &op.filter)? {
                continue;
            }
            for (column_id, value) in op.assignments.iter().zip(&op.values) {
                row[column_id.index] = value.clone();
            }
            count += 1;
        }

        Ok(Response::count(count))
    }

    pub(crate) fn delete(
        &mut self,
        schema: &Schema,
        op: Delete,
    ) -> Result<Response> {
        let table = schema.table(op.table);
        let data = self.table_mut(op.table);

        let mut kept = Vec::with_capacity(data.rows.len());
        let mut count = 0;
        for row in data.rows.drain(..) {
            if matches(table, &row, &op.filter)? {
                count += 1;
            } else {
                kept.push(row);
            }
        }
        data.rows = kept;

        Ok(Response::count(count))
    }

    pub(crate) fn query(
        &mut self,
        schema: &Schema,
        op: Query,
    ) -> Result<Response> {
        let table = schema.table(op.table);
        let data = self.table_mut(op.table);

        let mut records = vec![];
        for row in &data.rows {
            let selected = match &op.filter {
                Some(filter) => matches(table, row, filter)?,
                None => true,
            };
            if selected {
                records.push(
                    op.columns
                        .iter()
                        .map(|column_id| row[column_id.index].clone())
                        .collect(),
                );
            }
        }

        Ok(Response::values(records))
    }
}

fn matches(table: &Table, row: &[Value], filter: &Filter) -> Result<bool> {
    filter.expr.eval_bool(&mut RowInput {
        table,
        row,
        params: &filter.params,
    })
}

/// Binds a stored record and a parameter list as expression input.
pub(crate) struct RowInput<'a> {
    table: &'a Table,
    row: &'a [Value],
    params: &'a [Value],
}

impl Input for RowInput<'_> {
    fn arg(&mut self, position: usize) -> Result<Value> {
        match self.params.get(position) {
            Some(value) => Ok(value.clone()),
            None => Err(Error::write(StoreError::new(format!(
                "parameter {position} out of bounds"
            )))),
        }
    }

    fn column(&mut self, name: &str) -> Result<Value> {
        match self.table.column_by_name(name) {
            Some(column) => Ok(self.row[column.id.index].clone()),
            None => Err(Error::write(StoreError::new(format!(
                "unknown column `{}.{name}`",
                self.table.name
            )))),
        }
    }
}

/// A native error of the memory store.
#[derive(Debug)]
pub(crate) struct StoreError {
    message: String,
}

impl StoreError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}

impl std::error::Error for StoreError {}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
