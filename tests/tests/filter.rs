use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use rowsync::filter::{self, CompareOp, FieldFilter};
use rowsync_core::stmt::{Expr, Value};
use tests::{schema, table};

fn fields(entries: Vec<(&str, FieldFilter)>) -> IndexMap<String, FieldFilter> {
    entries
        .into_iter()
        .map(|(name, filter)| (name.to_string(), filter))
        .collect()
}

// ---------------------------------------------------------------------------
// Equality round-trip: one placeholder, one parameter
// ---------------------------------------------------------------------------

#[test]
fn equal_builds_single_placeholder() {
    let built = filter::build(
        "AND",
        &fields(vec![("lastname", FieldFilter::new("Smith", CompareOp::Equal))]),
        None,
    )
    .unwrap();

    let expected = Expr::eq(Expr::column("lastname"), Expr::arg(0));
    assert_eq!(built.expr, Some(expected));
    assert_eq!(built.params, vec![Value::from("Smith")]);
}

// ---------------------------------------------------------------------------
// LIKE-family wildcard placement happens in the parameter, not the condition
// ---------------------------------------------------------------------------

#[test]
fn like_prefix_appends_wildcard_to_parameter() {
    let built = filter::build(
        "AND",
        &fields(vec![(
            "lastname",
            FieldFilter::new("Sm", CompareOp::LikePrefix),
        )]),
        None,
    )
    .unwrap();

    assert_eq!(built.params, vec![Value::from("Sm%")]);
    let expected = Expr::like(Expr::column("lastname"), Expr::arg(0));
    assert_eq!(built.expr, Some(expected));
}

#[test]
fn like_variants_place_wildcards() {
    for (op, expected) in [
        (CompareOp::Like, "Sm"),
        (CompareOp::LikePrefix, "Sm%"),
        (CompareOp::LikeSuffix, "%Sm"),
        (CompareOp::LikeContains, "%Sm%"),
    ] {
        let built = filter::build(
            "AND",
            &fields(vec![("lastname", FieldFilter::new("Sm", op))]),
            None,
        )
        .unwrap();
        assert_eq!(built.params, vec![Value::from(expected)], "op {op:?}");
    }
}

// ---------------------------------------------------------------------------
// Multi-value IN: one placeholder per element, parameters in element order
// ---------------------------------------------------------------------------

#[test]
fn multi_value_in_expands_placeholders() {
    let built = filter::build(
        "AND",
        &fields(vec![(
            "status",
            FieldFilter::new(
                vec![Value::from("A"), Value::from("B")],
                CompareOp::In,
            ),
        )]),
        None,
    )
    .unwrap();

    let expected = Expr::in_list(
        Expr::column("status"),
        Expr::list_from_vec(vec![Expr::arg(0), Expr::arg(1)]),
    );
    assert_eq!(built.expr, Some(expected));
    assert_eq!(built.params, vec![Value::from("A"), Value::from("B")]);
}

// ---------------------------------------------------------------------------
// Connector handling
// ---------------------------------------------------------------------------

#[test]
fn connector_is_case_insensitive() {
    let built = filter::build(
        "or",
        &fields(vec![
            ("a", FieldFilter::new(1i64, CompareOp::Equal)),
            ("b", FieldFilter::new(2i64, CompareOp::Equal)),
        ]),
        None,
    )
    .unwrap();

    let expected = Expr::or(
        Expr::eq(Expr::column("a"), Expr::arg(0)),
        Expr::eq(Expr::column("b"), Expr::arg(1)),
    );
    assert_eq!(built.expr, Some(expected));
}

#[test]
fn bad_connector_is_rejected() {
    let err = filter::build(
        "NEITHER",
        &fields(vec![("a", FieldFilter::new(1i64, CompareOp::Equal))]),
        None,
    )
    .unwrap_err();

    assert!(err.is_invalid_connector());
}

// ---------------------------------------------------------------------------
// Valueless fields are skipped; all skipped is a None condition, not an error
// ---------------------------------------------------------------------------

#[test]
fn empty_fields_are_skipped() {
    let built = filter::build(
        "AND",
        &fields(vec![
            ("a", FieldFilter::new(Value::Null, CompareOp::Equal)),
            ("b", FieldFilter::new("set", CompareOp::Equal)),
            ("c", FieldFilter::new(Vec::<Value>::new(), CompareOp::In)),
        ]),
        None,
    )
    .unwrap();

    // only `b` contributes, so no And node wraps it
    let expected = Expr::eq(Expr::column("b"), Expr::arg(0));
    assert_eq!(built.expr, Some(expected));
    assert_eq!(built.params, vec![Value::from("set")]);
}

#[test]
fn no_contributing_field_builds_nothing() {
    let built = filter::build(
        "AND",
        &fields(vec![("a", FieldFilter::new(Value::Null, CompareOp::Equal))]),
        None,
    )
    .unwrap();

    assert_eq!(built.expr, None);
    assert!(built.params.is_empty());
    assert!(built.into_filter().is_none());
}

// ---------------------------------------------------------------------------
// Known schema columns resolve by name; unknown fields fall back to a bare
// name-only column reference
// ---------------------------------------------------------------------------

#[test]
fn unknown_fields_fall_back_to_bare_columns() {
    let schema = schema();
    let users = table(&schema, "users");

    let built = filter::build(
        "AND",
        &fields(vec![
            ("name", FieldFilter::new("Ada", CompareOp::Equal)),
            ("not_a_column", FieldFilter::new(1i64, CompareOp::Greater)),
        ]),
        Some(users),
    )
    .unwrap();

    let expected = Expr::and(
        Expr::eq(Expr::column("name"), Expr::arg(0)),
        Expr::gt(Expr::column("not_a_column"), Expr::arg(1)),
    );
    assert_eq!(built.expr, Some(expected));
}
