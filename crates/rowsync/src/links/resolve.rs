use rowsync_core::{
    schema::{Relation, Table, TableId},
    Error, Result, Schema,
};

/// A junction table resolved against its master side: the relation pairing
/// it with the master table and the unique relation to the detail table on
/// the other side.
#[derive(Debug)]
pub struct ResolvedLink<'a> {
    pub junction: &'a Table,

    /// junction ↔ master
    pub master: &'a Relation,

    /// junction ↔ detail
    pub detail: &'a Relation,

    pub detail_table: TableId,
}

/// Finds the unique "other side" of a junction table.
///
/// Of the relations touching the junction table, the one pairing it with
/// `owner` is the master side; self-loops are excluded. Exactly one relation
/// to any other table must remain: none fails with a relationship-not-found
/// error, several with an ambiguous-relationship error.
pub fn resolve(schema: &Schema, junction: TableId, owner: TableId) -> Result<ResolvedLink<'_>> {
    let junction_table = schema.table(junction);
    let owner_table = schema.table(owner);

    let master = schema
        .relations_of(junction)
        .find(|relation| !relation.is_self_loop() && relation.other_side(junction) == owner)
        .ok_or_else(|| {
            Error::relationship_not_found(junction_table.name.as_str(), owner_table.name.as_str())
        })?;

    let candidates: Vec<&Relation> = schema
        .relations_of(junction)
        .filter(|relation| !relation.is_self_loop() && relation.other_side(junction) != owner)
        .collect();

    match candidates.as_slice() {
        [] => Err(Error::relationship_not_found(
            junction_table.name.as_str(),
            owner_table.name.as_str(),
        )),
        [detail] => Ok(ResolvedLink {
            junction: junction_table,
            master,
            detail,
            detail_table: detail.other_side(junction),
        }),
        _ => Err(Error::ambiguous_relationship(
            junction_table.name.as_str(),
            owner_table.name.as_str(),
            candidates
                .iter()
                .map(|relation| {
                    schema
                        .table(relation.other_side(junction))
                        .name
                        .as_str()
                        .into()
                })
                .collect(),
        )),
    }
}
