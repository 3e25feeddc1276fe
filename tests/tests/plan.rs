use pretty_assertions::assert_eq;
use rowsync::plan::WritePlan;
use rowsync_core::{
    driver::Operation,
    stmt::{Expr, Value},
};
use tests::{existing_user, new_user, schema, table};

// ---------------------------------------------------------------------------
// Insert compilation: assignable columns only, generated keys requested back
// ---------------------------------------------------------------------------

#[test]
fn insert_assigns_non_generated_columns() {
    let schema = schema();
    let users = table(&schema, "users");

    let row = new_user(&schema, "Ada");
    let plan = WritePlan::compile_inserts(users, std::slice::from_ref(&row)).unwrap();

    assert_eq!(plan.len(), 1);
    let step = &plan.steps[0];
    assert_eq!(step.write_back, Some(0));

    let Operation::Insert(insert) = &step.op else {
        panic!("expected insert operation");
    };

    // `id` is auto-incremented and `initials` store-computed: neither is
    // assigned, and the generated key is requested back.
    let assigned: Vec<&str> = insert
        .columns
        .iter()
        .map(|id| users.column(*id).name.as_str())
        .collect();
    assert_eq!(assigned, vec!["name", "email"]);
    assert_eq!(insert.values, vec![Value::from("Ada"), Value::Null]);

    let returning: Vec<&str> = insert
        .returning
        .as_ref()
        .unwrap()
        .iter()
        .map(|id| users.column(*id).name.as_str())
        .collect();
    assert_eq!(returning, vec!["id"]);
}

// ---------------------------------------------------------------------------
// Update compilation: keyed on every primary-key column
// ---------------------------------------------------------------------------

#[test]
fn update_filters_by_primary_key() {
    let schema = schema();
    let users = table(&schema, "users");

    let row = existing_user(&schema, 7, "Ada", None);
    let plan = WritePlan::compile_updates(users, std::slice::from_ref(&row)).unwrap();

    assert_eq!(plan.len(), 1);
    let Operation::Update(update) = &plan.steps[0].op else {
        panic!("expected update operation");
    };
    assert!(plan.steps[0].write_back.is_none());

    assert_eq!(
        update.filter.expr,
        Expr::eq(Expr::column("id"), Expr::arg(0))
    );
    assert_eq!(update.filter.params, vec![Value::I64(7)]);
}

#[test]
fn composite_keys_and_every_column() {
    let schema = schema();
    let users_tags = table(&schema, "users_tags");

    let mut row = rowsync_core::Row::new(users_tags);
    row.set(users_tags.column_by_name("user_id").unwrap(), 1i64);
    row.set(users_tags.column_by_name("tag_id").unwrap(), 7i64);

    let plan = WritePlan::compile_deletes(users_tags, std::slice::from_ref(&row)).unwrap();

    let Operation::Delete(delete) = &plan.steps[0].op else {
        panic!("expected delete operation");
    };

    assert_eq!(
        delete.filter.expr,
        Expr::and(
            Expr::eq(Expr::column("user_id"), Expr::arg(0)),
            Expr::eq(Expr::column("tag_id"), Expr::arg(1)),
        )
    );
    assert_eq!(delete.filter.params, vec![Value::I64(1), Value::I64(7)]);
}

// ---------------------------------------------------------------------------
// Group order: inserts, then updates, then deletes
// ---------------------------------------------------------------------------

#[test]
fn compile_orders_groups() {
    let schema = schema();
    let users = table(&schema, "users");

    let added = vec![new_user(&schema, "Dee")];
    let changed = vec![existing_user(&schema, 1, "Ada", None)];
    let deleted = vec![existing_user(&schema, 2, "Bob", None)];

    let plan = WritePlan::compile(users, &added, &changed, &deleted).unwrap();

    assert_eq!(plan.len(), 3);
    assert!(matches!(plan.steps[0].op, Operation::Insert(_)));
    assert!(matches!(plan.steps[1].op, Operation::Update(_)));
    assert!(matches!(plan.steps[2].op, Operation::Delete(_)));
}

// ---------------------------------------------------------------------------
// No primary key: compilation fails up front, even for empty groups
// ---------------------------------------------------------------------------

#[test]
fn missing_primary_key_is_fatal() {
    let schema = schema();
    let users_notes = table(&schema, "users_notes");

    let err = WritePlan::compile_deletes(users_notes, &[]).unwrap_err();
    assert!(err.is_no_primary_key());

    let err = WritePlan::compile_inserts(users_notes, &[]).unwrap_err();
    assert!(err.is_no_primary_key());
}
