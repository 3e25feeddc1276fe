use pretty_assertions::assert_eq;
use rowsync::links::{resolve, Linker};
use rowsync_core::stmt::Value;
use tests::{existing_user, schema, store_with_tags, stored_links, table, table_id, tag};

// ---------------------------------------------------------------------------
// Resolution: master side plus exactly one other side
// ---------------------------------------------------------------------------

#[test]
fn resolve_finds_the_detail_side() {
    let schema = schema();
    let link = resolve(&schema, table_id(&schema, "users_tags"), table_id(&schema, "users")).unwrap();

    assert_eq!(link.junction.name, "users_tags");
    assert_eq!(link.detail_table, table_id(&schema, "tags"));
}

#[test]
fn resolve_reports_missing_relationship() {
    let schema = schema();
    // tags ↔ users_tags ↔ users seen from `notes`: no master relation
    let err = resolve(&schema, table_id(&schema, "users_tags"), table_id(&schema, "notes"))
        .unwrap_err();
    assert!(err.is_relationship_not_found());
}

#[test]
fn resolve_reports_ambiguity() {
    let mut builder = rowsync_core::Schema::builder();
    {
        let a = builder.table("a");
        a.column("id", rowsync_core::stmt::Type::I64).primary_key();
    }
    {
        let b = builder.table("b");
        b.column("id", rowsync_core::stmt::Type::I64).primary_key();
    }
    {
        let c = builder.table("c");
        c.column("id", rowsync_core::stmt::Type::I64).primary_key();
    }
    {
        let j = builder.table("j");
        j.column("a_id", rowsync_core::stmt::Type::I64).primary_key();
        j.column("b_id", rowsync_core::stmt::Type::I64).primary_key();
        j.column("c_id", rowsync_core::stmt::Type::I64);
    }
    builder.relation("j_a", "j", &["a_id"], "a", &["id"]);
    builder.relation("j_b", "j", &["b_id"], "b", &["id"]);
    builder.relation("j_c", "j", &["c_id"], "c", &["id"]);
    let schema = builder.build().unwrap();

    let err = resolve(&schema, table_id(&schema, "j"), table_id(&schema, "a")).unwrap_err();
    assert!(err.is_ambiguous_relationship());
}

// ---------------------------------------------------------------------------
// add_links: minimal inserts, pre-existing links detected, idempotent
// ---------------------------------------------------------------------------

#[test]
fn add_links_inserts_missing_links_only() {
    let schema = schema();
    let memory = store_with_tags(&schema, &[(7, "red"), (8, "blue")]);
    let junction = table(&schema, "users_tags");
    memory.seed(junction, vec![Value::I64(1), Value::I64(7), Value::Null]);

    let master = existing_user(&schema, 1, "Ada", None);
    let details = vec![tag(&schema, 7, "red"), tag(&schema, 8, "blue")];

    let linker = Linker::new(&schema, &memory);
    linker
        .add_links(junction.id, &master, &details, None)
        .unwrap();

    assert_eq!(stored_links(&schema, &memory), vec![(1, 7), (1, 8)]);
}

#[test]
fn add_links_is_idempotent() {
    let schema = schema();
    let memory = store_with_tags(&schema, &[(7, "red"), (8, "blue")]);
    let junction = table_id(&schema, "users_tags");

    let master = existing_user(&schema, 1, "Ada", None);
    let details = vec![tag(&schema, 7, "red"), tag(&schema, 8, "blue")];

    let linker = Linker::new(&schema, &memory);
    linker.add_links(junction, &master, &details, None).unwrap();
    let after_first = stored_links(&schema, &memory);

    linker.add_links(junction, &master, &details, None).unwrap();
    assert_eq!(stored_links(&schema, &memory), after_first);
}

#[test]
fn add_links_skips_unselected_details() {
    let schema = schema();
    let memory = store_with_tags(&schema, &[(7, "red")]);
    let junction = table_id(&schema, "users_tags");
    let tags = table(&schema, "tags");

    let master = existing_user(&schema, 1, "Ada", None);
    // a detail row with no key value projects to null and is skipped
    let details = vec![rowsync_core::Row::new(tags), tag(&schema, 7, "red")];

    let linker = Linker::new(&schema, &memory);
    linker.add_links(junction, &master, &details, None).unwrap();

    assert_eq!(stored_links(&schema, &memory), vec![(1, 7)]);
}

// ---------------------------------------------------------------------------
// remove_links / remove_all_links: other masters' rows stay untouched
// ---------------------------------------------------------------------------

#[test]
fn remove_links_deletes_matching_rows_only() {
    let schema = schema();
    let memory = store_with_tags(&schema, &[(7, "red"), (8, "blue"), (9, "green")]);
    let junction = table(&schema, "users_tags");
    for tag_id in [7, 8, 9] {
        memory.seed(junction, vec![Value::I64(1), Value::I64(tag_id), Value::Null]);
    }

    let master = existing_user(&schema, 1, "Ada", None);
    let linker = Linker::new(&schema, &memory);
    linker
        .remove_links(junction.id, &master, &[tag(&schema, 8, "blue")], None)
        .unwrap();

    assert_eq!(stored_links(&schema, &memory), vec![(1, 7), (1, 9)]);
}

#[test]
fn remove_all_links_leaves_other_masters_alone() {
    let schema = schema();
    let memory = store_with_tags(&schema, &[(7, "red"), (8, "blue"), (9, "green")]);
    let junction = table(&schema, "users_tags");
    for tag_id in [7, 8, 9] {
        memory.seed(junction, vec![Value::I64(1), Value::I64(tag_id), Value::Null]);
    }
    memory.seed(junction, vec![Value::I64(2), Value::I64(7), Value::Null]);

    let master = existing_user(&schema, 1, "Ada", None);
    let linker = Linker::new(&schema, &memory);
    linker.remove_all_links(junction.id, &master, None).unwrap();

    assert_eq!(stored_links(&schema, &memory), vec![(2, 7)]);
}

// ---------------------------------------------------------------------------
// fill_from_owner: one working row per owner row, link-derived columns
// copied, already-linked indices reported
// ---------------------------------------------------------------------------

#[test]
fn fill_from_owner_reports_linked_indices() {
    let schema = schema();
    let memory = store_with_tags(&schema, &[(7, "red"), (8, "blue"), (9, "green")]);
    let junction = table(&schema, "users_tags");
    memory.seed(junction, vec![Value::I64(1), Value::I64(8), Value::Null]);

    let master = existing_user(&schema, 1, "Ada", None);
    let owners = vec![
        tag(&schema, 7, "red"),
        tag(&schema, 8, "blue"),
        tag(&schema, 9, "green"),
    ];

    let linker = Linker::new(&schema, &memory);
    let (working, linked) = linker
        .fill_from_owner(junction.id, &master, &owners, None)
        .unwrap();

    assert_eq!(working.len(), 3);
    assert_eq!(linked, vec![1]);

    let user_id = junction.column_by_name("user_id").unwrap();
    let tag_id = junction.column_by_name("tag_id").unwrap();
    let name = junction.column_by_name("name").unwrap();

    assert_eq!(working[0].get(user_id), &Value::I64(1));
    assert_eq!(working[0].get(tag_id), &Value::I64(7));
    // the link-derived display column is copied from the owner row
    assert_eq!(working[0].get(name), &Value::from("red"));
}
