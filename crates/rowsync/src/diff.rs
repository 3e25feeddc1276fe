use rowsync_core::{row::KeyValues, schema::Column, Row};

/// The classification produced by [`diff`]: rows whose values changed and
/// rows that disappeared. Desired rows left unmatched stay in the caller's
/// vector and form the "added" set.
#[derive(Debug, Default)]
pub struct Diff {
    /// Desired-state rows that matched an old row but differ in value
    pub changed: Vec<Row>,

    /// Old rows with no match in the desired set
    pub deleted: Vec<Row>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.deleted.is_empty()
    }
}

/// Diffs an old table snapshot against the desired row set.
///
/// For each old row, a [`KeyValues`] over `key_columns` is matched against
/// `desired` with a linear first-match scan. A matched desired row is
/// removed from `desired` (later old rows cannot re-match it) and lands in
/// `changed` when any column value differs from the old row; fully
/// value-equal pairs are a no-op. Unmatched old rows land in `deleted`.
/// A row is never classified as both changed and deleted.
///
/// When several desired rows carry duplicate key values, the first
/// positional match wins and the duplicates stay in `desired` unmatched;
/// callers must not assume stable row identity beyond this.
pub fn diff(old: &[Row], desired: &mut Vec<Row>, key_columns: &[&Column]) -> Diff {
    let mut result = Diff::default();

    for old_row in old {
        let key = KeyValues::of(old_row, key_columns);

        let found = desired
            .iter()
            .position(|candidate| KeyValues::of(candidate, key_columns) == key);

        match found {
            Some(at) => {
                let candidate = desired.remove(at);
                if !values_equal(old_row, &candidate) {
                    result.changed.push(candidate);
                }
            }
            None => result.deleted.push(old_row.clone()),
        }
    }

    result
}

fn values_equal(lhs: &Row, rhs: &Row) -> bool {
    lhs.values().len() == rhs.values().len()
        && lhs
            .values()
            .iter()
            .zip(rhs.values())
            .all(|(lhs, rhs)| lhs.compares_eq(rhs))
}
