use super::Row;
use crate::schema::{Column, Relation, Schema, Table};
use crate::stmt::Value;

/// An immutable, named, typed value set identifying a logical row
/// independent of surrogate identity.
///
/// Built either from a row's own columns or by projecting a row through one
/// side of a relation onto the other side's column names. Equality is
/// per-named-column, type-aware, and order-insensitive.
#[derive(Debug, Clone)]
pub struct KeyValues {
    entries: Vec<(String, Value)>,
}

impl KeyValues {
    /// Projection of `row` onto its own `columns`.
    pub fn of(row: &Row, columns: &[&Column]) -> KeyValues {
        KeyValues {
            entries: columns
                .iter()
                .map(|column| (column.name.clone(), row.get(column).clone()))
                .collect(),
        }
    }

    /// Foreign-key projection of `row` through `relation`: values come from
    /// the row's side of the relation, names from the opposite side.
    ///
    /// For a master row projected through the master↔junction relation, the
    /// result is keyed by junction column names and ready to match (or
    /// populate) junction rows.
    pub fn project(row: &Row, relation: &Relation, schema: &Schema) -> KeyValues {
        let table = schema.table(row.table());
        let own = relation.columns_on(row.table());
        let opposite = relation.columns_opposite(row.table());

        KeyValues {
            entries: own
                .iter()
                .zip(opposite)
                .map(|(own_id, opposite_id)| {
                    let value = row.get(table.column(*own_id)).clone();
                    (schema.column(*opposite_id).name.clone(), value)
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &(String, Value)> + '_ {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Tests a row of `table` against this key set.
    pub fn matches_row(&self, row: &Row, table: &Table) -> bool {
        self.entries.iter().all(|(name, value)| {
            table
                .column_by_name(name)
                .is_some_and(|column| row.get(column).compares_eq(value))
        })
    }
}

impl PartialEq for KeyValues {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(name, value)| {
                other
                    .get(name)
                    .is_some_and(|other_value| value.compares_eq(other_value))
            })
    }
}
