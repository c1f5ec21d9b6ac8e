//! PARAMETERS clause semantics: upsert, wholesale replace, rendering.

use gaql::{MAX_PARAMETERS, ParameterValue, QueryBuilder};

fn renderable() -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.select(&["id"]).unwrap().from("campaign").unwrap();
    qb
}

// ── Upsert ───────────────────────────────────────────────────────────────────

#[test]
fn new_names_append_in_call_order() {
    let mut qb = renderable();
    qb.parameter("b", 2i64).unwrap();
    qb.parameter("a", 1i64).unwrap();
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign PARAMETERS b = 2, a = 1"
    );
}

#[test]
fn existing_name_keeps_position_takes_new_value() {
    let mut qb = renderable();
    qb.parameter("first", 1i64).unwrap();
    qb.parameter("second", 2i64).unwrap();
    qb.parameter("first", true).unwrap();
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign PARAMETERS first = true, second = 2"
    );
}

// ── Wholesale replace ────────────────────────────────────────────────────────

#[test]
fn replace_discards_previous_set() {
    let mut qb = renderable();
    qb.parameter("stale", 1i64).unwrap();
    qb.parameters(&[
        ("a", ParameterValue::Int(1)),
        ("b", ParameterValue::Bool(false)),
    ])
    .unwrap();
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign PARAMETERS a = 1, b = false"
    );
}

#[test]
fn replace_collapses_duplicate_names_to_last() {
    let mut qb = renderable();
    qb.parameters(&[
        ("p", ParameterValue::Int(1)),
        ("q", ParameterValue::Int(2)),
        ("p", ParameterValue::Int(9)),
    ])
    .unwrap();
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign PARAMETERS p = 9, q = 2"
    );
}

#[test]
fn replace_with_empty_slice_clears_the_clause() {
    let mut qb = renderable();
    qb.parameter("p", 1i64).unwrap();
    qb.parameters(&[]).unwrap();
    assert_eq!(qb.build().unwrap(), "SELECT id FROM campaign");
}

#[test]
fn failed_replace_keeps_previous_set() {
    let mut qb = renderable();
    qb.parameter("keep", 7i64).unwrap();
    let err = qb
        .parameters(&[("bad.name", ParameterValue::Int(1))])
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign PARAMETERS keep = 7"
    );
}

// ── Validation ───────────────────────────────────────────────────────────────

#[test]
fn dotted_names_rejected() {
    let mut qb = renderable();
    let err = qb.parameter("a.b", 1i64).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("'a.b'"));
}

#[test]
fn non_finite_values_rejected() {
    let mut qb = renderable();
    assert!(qb.parameter("rate", f64::NAN).unwrap_err().is_validation());
    assert!(
        qb.parameters(&[("rate", ParameterValue::Float(f64::INFINITY))])
            .unwrap_err()
            .is_validation()
    );
}

// ── Rendering ────────────────────────────────────────────────────────────────

#[test]
fn booleans_render_lowercase_in_parameters() {
    let mut qb = renderable();
    qb.parameter("flag", true).unwrap();
    qb.where_eq("campaign.primary_status_reason_active", false)
        .unwrap();
    let query = qb.build().unwrap();
    // condition booleans are uppercase, parameter booleans lowercase
    assert!(query.contains("= FALSE"));
    assert!(query.ends_with("PARAMETERS flag = true"));
}

#[test]
fn parameters_render_after_limit() {
    let mut qb = renderable();
    qb.parameter("p", 1i64).unwrap();
    qb.limit(10).unwrap();
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign LIMIT 10 PARAMETERS p = 1"
    );
}

// ── Ceiling ──────────────────────────────────────────────────────────────────

#[test]
fn wholesale_replace_over_ceiling_is_atomic() {
    let mut qb = renderable();
    qb.parameter("survivor", 1i64).unwrap();

    let names: Vec<String> = (0..=MAX_PARAMETERS).map(|i| format!("p{i}")).collect();
    let entries: Vec<(&str, ParameterValue)> = names
        .iter()
        .map(|n| (n.as_str(), ParameterValue::Int(0)))
        .collect();
    let err = qb.parameters(&entries).unwrap_err();
    assert!(err.is_limit());
    assert_eq!(
        qb.build().unwrap(),
        "SELECT id FROM campaign PARAMETERS survivor = 1"
    );
}

#[test]
fn wholesale_replace_at_ceiling_accepted() {
    let mut qb = renderable();
    let names: Vec<String> = (0..MAX_PARAMETERS).map(|i| format!("p{i}")).collect();
    let entries: Vec<(&str, ParameterValue)> = names
        .iter()
        .map(|n| (n.as_str(), ParameterValue::Int(0)))
        .collect();
    assert!(qb.parameters(&entries).is_ok());
}
