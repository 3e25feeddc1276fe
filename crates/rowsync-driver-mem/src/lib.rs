mod store;
use store::{Store, StoreError};

use rowsync_core::{
    driver::{operation::Transaction, DataSource, Operation, Response},
    schema::{Table, TableId},
    stmt::Value,
    Error, Result, Row, Schema,
};
use std::sync::{Arc, Mutex};
use url::Url;

/// An in-memory store driver.
///
/// Every connection opened from the same `Memory` shares the same tables,
/// so separate connections observe each other's committed writes. Intended
/// for tests and embedded use; transactions roll back by snapshot.
#[derive(Debug, Clone)]
pub struct Memory {
    store: Arc<Mutex<Store>>,
}

impl Memory {
    /// Create a new memory driver from a connection URL with a `mem`
    /// scheme, e.g. `mem:scratch`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::write)?;

        if url.scheme() != "mem" {
            return Err(rowsync_core::err!(
                "connection URL does not have a `mem` scheme; url={url_str}"
            ));
        }

        Ok(Self::anonymous())
    }

    /// Create an unnamed in-memory store.
    pub fn anonymous() -> Self {
        Memory {
            store: Arc::new(Mutex::new(Store::default())),
        }
    }

    /// Seed a table with a row, bypassing the engine. Test helper.
    pub fn seed(&self, table: &Table, values: Vec<Value>) {
        assert_eq!(values.len(), table.columns.len());
        let mut store = self.store.lock().unwrap();
        store.table_mut(table.id).rows.push(values);
    }

    /// A snapshot of a table's raw rows. Test helper.
    pub fn rows(&self, table: TableId) -> Vec<Vec<Value>> {
        let mut store = self.store.lock().unwrap();
        store.table_mut(table).rows.clone()
    }

    /// A snapshot of a table's rows bound to the schema. Test helper.
    pub fn rows_of(&self, table: &Table) -> Vec<Row> {
        self.rows(table.id)
            .into_iter()
            .map(|values| Row::existing(table, values))
            .collect()
    }
}

impl DataSource for Memory {
    fn connect(&self) -> Result<Box<dyn rowsync_core::Connection>> {
        Ok(Box::new(Connection {
            store: self.store.clone(),
            snapshot: None,
            closed: false,
        }))
    }
}

#[derive(Debug)]
pub struct Connection {
    store: Arc<Mutex<Store>>,

    /// Present while a transaction is open; restoring it is rollback.
    snapshot: Option<Store>,

    closed: bool,
}

impl rowsync_core::Connection for Connection {
    fn exec(&mut self, schema: &Schema, op: Operation) -> Result<Response> {
        if self.closed {
            return Err(Error::write(StoreError::new("connection is closed")));
        }

        let mut store = self.store.lock().unwrap();

        match op {
            Operation::Transaction(Transaction::Start) => {
                self.snapshot = Some(store.clone());
                Ok(Response::count(0))
            }
            Operation::Transaction(Transaction::Commit) => {
                self.snapshot = None;
                Ok(Response::count(0))
            }
            Operation::Transaction(Transaction::Rollback) => match self.snapshot.take() {
                Some(snapshot) => {
                    *store = snapshot;
                    Ok(Response::count(0))
                }
                None => Err(Error::write(StoreError::new("no open transaction"))),
            },
            Operation::Insert(op) => store.insert(schema, op),
            Operation::Update(op) => store.update(schema, op),
            Operation::Delete(op) => store.delete(schema, op),
            Operation::Query(op) => store.query(schema, op),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
