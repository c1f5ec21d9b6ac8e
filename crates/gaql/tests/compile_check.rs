//! Compile-only tests for core API patterns.
//!
//! These tests verify that key API surfaces compile and that the data
//! model round-trips through serde. They do not talk to any remote API.

use gaql::{
    CmpOp, Condition, GaqlResult, ParameterValue, QueryBuilder, SortOrder, Value,
    escape_pattern, is_pattern_safe,
};

// ── Compile checks ──────────────────────────────────────────────────────────

#[test]
fn compile_condition_builders() {
    let _ = || -> GaqlResult<()> {
        let _ = Condition::eq("campaign.status", "ENABLED")?;
        let _ = Condition::ne("campaign.status", "REMOVED")?;
        let _ = Condition::gt("metrics.clicks", 100i64)?;
        let _ = Condition::gte("metrics.ctr", 0.02)?;
        let _ = Condition::lt("metrics.cost_micros", 5_000_000i64)?;
        let _ = Condition::lte("metrics.impressions", 10_000i64)?;
        let _ = Condition::cmp("campaign.id", CmpOp::Eq, 42i64)?;
        let _ = Condition::in_list("segments.device", vec!["MOBILE", "TABLET"])?;
        let _ = Condition::not_in("campaign.id", vec![1i64, 2])?;
        let _ = Condition::like("campaign.name", "%brand%")?;
        let _ = Condition::not_like("campaign.name", "%test%")?;
        let _ = Condition::regexp_match("campaign.name", "(?i)brand")?;
        let _ = Condition::not_regexp_match("campaign.name", "(?i)test")?;
        let _ = Condition::is_null("campaign.end_date")?;
        let _ = Condition::is_not_null("campaign.start_date")?;
        let _ = Condition::between("metrics.clicks", 10, 20)?;
        let _ = Condition::contains_all("campaign.labels", vec!["a"])?;
        let _ = Condition::contains_any("campaign.labels", vec!["a"])?;
        let _ = Condition::contains_none("campaign.labels", vec!["a"])?;
        let _ = Condition::during("segments.date", "LAST_7_DAYS")?;
        Ok(())
    };
}

#[test]
fn compile_builder_chain() {
    let _ = || -> GaqlResult<String> {
        let mut qb = QueryBuilder::new();
        qb.select(&["campaign.id"])?
            .select_field("campaign.name")?
            .from("campaign")?
            .where_eq("campaign.status", "ENABLED")?
            .where_cmp("metrics.clicks", ">", 0i64)?
            .where_op("metrics.impressions", CmpOp::Gte, 100i64)?
            .where_condition(Condition::is_null("campaign.end_date")?)?
            .group_by(&["segments.device"])?
            .order_by("campaign.id")?
            .order_by_with("campaign.name", SortOrder::Desc)?
            .limit(10)?
            .parameter("include_drafts", false)?;
        qb.build()
    };
}

#[test]
fn value_conversions_cover_common_types() {
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(0.5), Value::Float(0.5));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("s"), Value::String("s".to_string()));
    assert_eq!(Value::from(String::from("s")), Value::String("s".to_string()));
    assert_eq!(Value::from(None::<&str>), Value::Null);

    assert_eq!(ParameterValue::from(true), ParameterValue::Bool(true));
    assert_eq!(ParameterValue::from(5i32), ParameterValue::Int(5));
    assert_eq!(ParameterValue::from(5i64), ParameterValue::Int(5));
    assert_eq!(ParameterValue::from(0.5), ParameterValue::Float(0.5));
}

#[test]
fn pattern_helpers_are_exported() {
    assert!(is_pattern_safe("[a-z]+"));
    assert!(!is_pattern_safe(".*.*"));
    assert_eq!(escape_pattern("a'b"), "a''b");
}

// ── Serde round-trips ───────────────────────────────────────────────────────

#[test]
fn value_round_trips_through_serde() {
    let values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(-3),
        Value::Float(2.5),
        Value::String("it's".to_string()),
    ];
    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn parameter_value_round_trips_through_serde() {
    let values = vec![
        ParameterValue::Bool(false),
        ParameterValue::Int(10),
        ParameterValue::Float(0.125),
    ];
    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: ParameterValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn operator_enums_round_trip_through_serde() {
    for op in [CmpOp::Eq, CmpOp::Ne, CmpOp::Gt, CmpOp::Gte, CmpOp::Lt, CmpOp::Lte] {
        let json = serde_json::to_string(&op).unwrap();
        let back: CmpOp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
    for order in [SortOrder::Asc, SortOrder::Desc] {
        let json = serde_json::to_string(&order).unwrap();
        let back: SortOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
