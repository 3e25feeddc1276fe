use pretty_assertions::assert_eq;
use rowsync::{exec, plan::WritePlan};
use rowsync_core::{driver::DataSource, stmt::Value};
use rowsync_driver_mem::Memory;
use tests::{existing_user, new_user, schema, table, table_id};

// ---------------------------------------------------------------------------
// Generated keys are written back and the row turns existing
// ---------------------------------------------------------------------------

#[test]
fn insert_writes_generated_keys_back() {
    let schema = schema();
    let users = table(&schema, "users");
    let memory = Memory::anonymous();
    let mut connection = memory.connect().unwrap();

    let mut added = vec![new_user(&schema, "Ada"), new_user(&schema, "Bob")];
    let plan = WritePlan::compile_inserts(users, &added).unwrap();

    exec::execute(&schema, plan, &mut added, connection.as_mut()).unwrap();

    let id = users.column_by_name("id").unwrap();
    assert_eq!(added[0].get(id), &Value::I64(1));
    assert_eq!(added[1].get(id), &Value::I64(2));
    assert!(!added[0].is_new());
    assert!(!added[0].is_dirty());
}

// ---------------------------------------------------------------------------
// Plan steps execute in order on the one connection
// ---------------------------------------------------------------------------

#[test]
fn update_and_delete_execute_in_plan_order() {
    let schema = schema();
    let users = table(&schema, "users");
    let memory = Memory::anonymous();

    memory.seed(users, vec![Value::I64(1), "Ada".into(), Value::Null, Value::Null]);
    memory.seed(users, vec![Value::I64(2), "Bob".into(), Value::Null, Value::Null]);

    let changed = vec![existing_user(&schema, 1, "Ada Lovelace", None)];
    let deleted = vec![existing_user(&schema, 2, "Bob", None)];
    let plan = WritePlan::compile(users, &[], &changed, &deleted).unwrap();

    let mut connection = memory.connect().unwrap();
    exec::execute(&schema, plan, &mut [], connection.as_mut()).unwrap();

    let rows = memory.rows(table_id(&schema, "users"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], Value::from("Ada Lovelace"));
}

// ---------------------------------------------------------------------------
// Transaction scaffold: commit on success, rollback on error, original
// error surfaces unmodified
// ---------------------------------------------------------------------------

#[test]
fn transaction_commits_on_success() {
    let schema = schema();
    let users = table(&schema, "users");
    let memory = Memory::anonymous();
    let mut connection = memory.connect().unwrap();

    exec::transaction(connection.as_mut(), &schema, |connection| {
        let mut added = vec![new_user(&schema, "Ada")];
        let plan = WritePlan::compile_inserts(users, &added)?;
        exec::execute(&schema, plan, &mut added, connection)
    })
    .unwrap();

    assert_eq!(memory.rows(table_id(&schema, "users")).len(), 1);
}

#[test]
fn transaction_rolls_back_on_error() {
    let schema = schema();
    let users = table(&schema, "users");
    let tags = table(&schema, "tags");
    let memory = tests::store_with_tags(&schema, &[(1, "existing")]);
    let mut connection = memory.connect().unwrap();

    let err = exec::transaction(connection.as_mut(), &schema, |connection| {
        let mut added = vec![new_user(&schema, "Ada")];
        let plan = WritePlan::compile_inserts(users, &added)?;
        exec::execute(&schema, plan, &mut added, connection)?;

        // a tag insert with an already-taken key fails the transaction
        let mut duplicate = vec![tests::tag(&schema, 1, "imposter")];
        let plan = WritePlan::compile_inserts(tags, &duplicate)?;
        exec::execute(&schema, plan, &mut duplicate, connection)
    })
    .unwrap_err();

    assert!(err.is_write());
    assert!(memory.rows(table_id(&schema, "users")).is_empty());
    assert_eq!(memory.rows(table_id(&schema, "tags")).len(), 1);
}
