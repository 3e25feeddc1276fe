use pretty_assertions::assert_eq;
use rowsync::diff;
use rowsync_core::stmt::Value;
use tests::{existing_user, schema, table};

// ---------------------------------------------------------------------------
// Every old row ends in exactly one of matched-unchanged / changed / deleted;
// unmatched desired rows remain as the caller's "added" set
// ---------------------------------------------------------------------------

#[test]
fn partition_is_complete_and_disjoint() {
    let schema = schema();
    let users = table(&schema, "users");
    let key_columns = users.reconcile_columns();

    let old = vec![
        existing_user(&schema, 1, "Ada", Some("ada@example.com")),
        existing_user(&schema, 2, "Bob", None),
        existing_user(&schema, 3, "Cyd", None),
    ];

    let mut desired = vec![
        // matches old[0] exactly: no-op
        existing_user(&schema, 1, "Ada", Some("ada@example.com")),
        // matches no old row: stays behind as "added"
        existing_user(&schema, 4, "Dee", None),
    ];

    let result = diff(&old, &mut desired, &key_columns);

    assert!(result.changed.is_empty());
    assert_eq!(result.deleted.len(), 2);
    assert_eq!(
        result.deleted[0].get(users.column_by_name("name").unwrap()),
        &Value::from("Bob")
    );
    assert_eq!(
        result.deleted[1].get(users.column_by_name("name").unwrap()),
        &Value::from("Cyd")
    );

    // the remaining desired row is implicitly "added"
    assert_eq!(desired.len(), 1);
    assert_eq!(
        desired[0].get(users.column_by_name("name").unwrap()),
        &Value::from("Dee")
    );
}

// ---------------------------------------------------------------------------
// Fully value-equal pairs are a no-op
// ---------------------------------------------------------------------------

#[test]
fn equal_rows_are_neither_changed_nor_deleted() {
    let schema = schema();
    let users = table(&schema, "users");
    let key_columns = users.reconcile_columns();

    let old = vec![existing_user(&schema, 1, "Ada", None)];
    let mut desired = vec![existing_user(&schema, 1, "Ada", None)];

    let result = diff(&old, &mut desired, &key_columns);

    assert!(result.is_empty());
    assert!(desired.is_empty());
}

// ---------------------------------------------------------------------------
// A key-matched row whose other values differ lands in `changed`, carrying
// the desired (new) state
// ---------------------------------------------------------------------------

#[test]
fn value_change_is_detected() {
    let schema = schema();
    let users = table(&schema, "users");
    let name = users.column_by_name("name").unwrap();
    let email = users.column_by_name("email").unwrap();

    // reconcile on the name column only, so the email can differ
    let key_columns = vec![name];

    let old = vec![existing_user(&schema, 1, "Ada", None)];
    let mut desired = vec![existing_user(&schema, 1, "Ada", Some("ada@example.com"))];

    let result = diff(&old, &mut desired, &key_columns);

    assert_eq!(result.changed.len(), 1);
    assert!(result.deleted.is_empty());
    assert!(desired.is_empty());
    assert_eq!(
        result.changed[0].get(email),
        &Value::from("ada@example.com")
    );
}

// ---------------------------------------------------------------------------
// A row never lands in both changed and deleted
// ---------------------------------------------------------------------------

#[test]
fn changed_and_deleted_never_overlap() {
    let schema = schema();
    let users = table(&schema, "users");
    let name = users.column_by_name("name").unwrap();
    let key_columns = vec![name];

    let old = vec![
        existing_user(&schema, 1, "Ada", None),
        existing_user(&schema, 2, "Bob", None),
    ];
    let mut desired = vec![existing_user(&schema, 1, "Ada", Some("new@example.com"))];

    let result = diff(&old, &mut desired, &key_columns);

    assert_eq!(result.changed.len(), 1);
    assert_eq!(result.deleted.len(), 1);
    assert_eq!(result.changed[0].get(name), &Value::from("Ada"));
    assert_eq!(result.deleted[0].get(name), &Value::from("Bob"));
}

// ---------------------------------------------------------------------------
// Duplicate key values among desired rows: first positional match wins, the
// duplicate stays unmatched in the desired set
// ---------------------------------------------------------------------------

#[test]
fn duplicate_desired_keys_match_first_positionally() {
    let schema = schema();
    let users = table(&schema, "users");
    let name = users.column_by_name("name").unwrap();
    let email = users.column_by_name("email").unwrap();
    let key_columns = vec![name];

    let old = vec![existing_user(&schema, 1, "Ada", None)];
    let mut desired = vec![
        existing_user(&schema, 1, "Ada", Some("first@example.com")),
        existing_user(&schema, 1, "Ada", Some("second@example.com")),
    ];

    let result = diff(&old, &mut desired, &key_columns);

    assert_eq!(result.changed.len(), 1);
    assert_eq!(
        result.changed[0].get(email),
        &Value::from("first@example.com")
    );
    assert_eq!(desired.len(), 1);
    assert_eq!(
        desired[0].get(email),
        &Value::from("second@example.com")
    );
}
