mod builder;
pub use builder::Builder;

mod column;
pub use column::{Column, ColumnId};

mod pk;
pub use pk::PrimaryKey;

mod relation;
pub use relation::Relation;

mod table;
pub use table::{Table, TableId};

/// The schema of the backing store: tables plus the relationship graph.
///
/// Built once (externally or via [`Builder`]) and queried read-only by the
/// engine; never mutated after construction.
#[derive(Debug)]
pub struct Schema {
    /// All tables, indexed by `TableId`
    pub tables: Vec<Table>,

    /// The relationship graph connecting tables
    pub relations: Vec<Relation>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        self.table(id.table).column(id)
    }

    /// All relations touching the given table, on either side.
    pub fn relations_of(&self, table: TableId) -> impl Iterator<Item = &Relation> + '_ {
        self.relations
            .iter()
            .filter(move |relation| relation.touches(table))
    }

    /// The relation connecting `from` to `to` over exactly the named
    /// `from`-side columns, if one exists.
    pub fn relationship(
        &self,
        from: TableId,
        from_columns: &[&str],
        to: TableId,
    ) -> Option<&Relation> {
        self.relations.iter().find(|relation| {
            relation.connects(from, to) && {
                let on_from = relation.columns_on(from);
                on_from.len() == from_columns.len()
                    && on_from
                        .iter()
                        .zip(from_columns)
                        .all(|(id, name)| self.column(*id).name == **name)
            }
        })
    }
}
