use super::{Column, ColumnId, PrimaryKey, Relation, Schema, Table, TableId};
use crate::{bail, stmt::Type, Result};

/// Programmatic schema assembly with validation at `build` time.
#[derive(Default)]
pub struct Builder {
    tables: Vec<TableBuilder>,
    relations: Vec<RelationSpec>,
}

pub struct TableBuilder {
    name: String,
    columns: Vec<ColumnSpec>,
}

pub struct ColumnSpec {
    name: String,
    ty: Type,
    nullable: bool,
    primary_key: bool,
    auto_increment: bool,
    persistent: bool,
    computed: bool,
}

struct RelationSpec {
    name: String,
    from_table: String,
    from_columns: Vec<String>,
    to_table: String,
    to_columns: Vec<String>,
}

impl Builder {
    /// Starts a new table; columns are added on the returned builder.
    pub fn table(&mut self, name: impl Into<String>) -> &mut TableBuilder {
        self.tables.push(TableBuilder {
            name: name.into(),
            columns: vec![],
        });
        self.tables.last_mut().unwrap()
    }

    /// Declares a relation between two tables by column names. Direction
    /// follows the foreign key: `from` references `to`.
    pub fn relation(
        &mut self,
        name: impl Into<String>,
        from_table: impl Into<String>,
        from_columns: &[&str],
        to_table: impl Into<String>,
        to_columns: &[&str],
    ) -> &mut Self {
        self.relations.push(RelationSpec {
            name: name.into(),
            from_table: from_table.into(),
            from_columns: from_columns.iter().map(|s| s.to_string()).collect(),
            to_table: to_table.into(),
            to_columns: to_columns.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut tables = Vec::with_capacity(self.tables.len());

        for (index, table) in self.tables.iter().enumerate() {
            tables.push(table.build(TableId(index))?);
        }

        let mut relations = Vec::with_capacity(self.relations.len());

        for spec in &self.relations {
            relations.push(spec.build(&tables)?);
        }

        Ok(Schema { tables, relations })
    }
}

impl TableBuilder {
    pub fn column(&mut self, name: impl Into<String>, ty: Type) -> &mut ColumnSpec {
        self.columns.push(ColumnSpec {
            name: name.into(),
            ty,
            nullable: true,
            primary_key: false,
            auto_increment: false,
            persistent: true,
            computed: false,
        });
        self.columns.last_mut().unwrap()
    }

    fn build(&self, id: TableId) -> Result<Table> {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, spec)| Column {
                id: ColumnId { table: id, index },
                name: spec.name.clone(),
                ty: spec.ty,
                nullable: spec.nullable,
                primary_key: spec.primary_key,
                auto_increment: spec.auto_increment,
                persistent: spec.persistent,
                computed: spec.computed,
            })
            .collect();

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|other| other.name == column.name) {
                bail!(
                    "table `{}` declares column `{}` more than once",
                    self.name,
                    column.name
                );
            }
            if column.auto_increment && !column.primary_key {
                bail!(
                    "column `{}.{}` is auto-incremented but not part of the primary key",
                    self.name,
                    column.name
                );
            }
        }

        let primary_key = PrimaryKey {
            columns: columns
                .iter()
                .filter(|column| column.primary_key)
                .map(|column| column.id)
                .collect(),
        };

        Ok(Table {
            id,
            name: self.name.clone(),
            columns,
            primary_key,
        })
    }
}

impl ColumnSpec {
    pub fn primary_key(&mut self) -> &mut Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto_increment = true;
        self
    }

    pub fn not_null(&mut self) -> &mut Self {
        self.nullable = false;
        self
    }

    /// Marks a link-derived in-memory column that does not exist in the
    /// backing table.
    pub fn not_persistent(&mut self) -> &mut Self {
        self.persistent = false;
        self
    }

    /// Marks a store-computed column: stored, never assigned by the engine.
    pub fn computed(&mut self) -> &mut Self {
        self.computed = true;
        self
    }
}

impl RelationSpec {
    fn build(&self, tables: &[Table]) -> Result<Relation> {
        let resolve_table = |name: &str| -> Result<&Table> {
            match tables.iter().find(|table| table.name == name) {
                Some(table) => Ok(table),
                None => Err(crate::err!("relation `{}` references unknown table `{name}`", self.name)),
            }
        };

        let resolve_columns = |table: &Table, names: &[String]| -> Result<Vec<ColumnId>> {
            names
                .iter()
                .map(|name| match table.column_by_name(name) {
                    Some(column) => Ok(column.id),
                    None => Err(crate::err!(
                        "relation `{}` references unknown column `{}.{name}`",
                        self.name,
                        table.name
                    )),
                })
                .collect()
        };

        if self.from_columns.len() != self.to_columns.len() {
            bail!(
                "relation `{}` column lists differ in length ({} vs {})",
                self.name,
                self.from_columns.len(),
                self.to_columns.len()
            );
        }

        let from = resolve_table(&self.from_table)?;
        let to = resolve_table(&self.to_table)?;

        Ok(Relation {
            name: self.name.clone(),
            from: from.id,
            to: to.id,
            from_columns: resolve_columns(from, &self.from_columns)?,
            to_columns: resolve_columns(to, &self.to_columns)?,
        })
    }
}
