//! Every compilation error kind, through the public API.

#[path = "../common/mod.rs"]
mod common;

use common::shop_model;
use quarry::{compile, CompileError, FilterClause, OrderBy, QueryRequest};

fn compile_request(json: &str) -> Result<String, CompileError> {
    let request = QueryRequest::from_json(json).unwrap();
    compile(&shop_model(), &request)
}

#[test]
fn test_empty_metric_list() {
    assert!(matches!(
        compile_request(r#"{"metrics": []}"#),
        Err(CompileError::EmptyMetricList)
    ));
    assert!(matches!(
        compile_request(r#"{"dimensions": ["status"]}"#),
        Err(CompileError::EmptyMetricList)
    ));
}

#[test]
fn test_unknown_metric() {
    let err = compile_request(r#"{"metrics": ["revenue", "margin"]}"#).unwrap_err();
    assert!(matches!(err, CompileError::UnknownMetric(ref m) if m == "margin"));
    assert_eq!(err.to_string(), "Unknown metric: margin");
}

#[test]
fn test_unknown_dimension() {
    let err = compile_request(r#"{"metrics": ["revenue"], "dimensions": ["shipped_at__month"]}"#)
        .unwrap_err();
    assert!(matches!(err, CompileError::UnknownDimension(ref d) if d == "shipped_at"));
}

#[test]
fn test_unknown_filter_field() {
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_filter(FilterClause::new("discount", ">", 0));
    let err = compile(&shop_model(), &request).unwrap_err();
    assert!(matches!(err, CompileError::UnknownFilterField(ref f) if f == "discount"));
}

#[test]
fn test_unresolvable_join_names_tables() {
    let err = compile_request(r#"{"metrics": ["revenue"], "dimensions": ["supplier"]}"#)
        .unwrap_err();
    match err {
        CompileError::UnresolvableJoin { tables } => assert_eq!(tables, vec!["suppliers"]),
        other => panic!("expected UnresolvableJoin, got {other:?}"),
    }
}

#[test]
fn test_unresolvable_without_intermediate_table() {
    // order_items reaches customers only through orders, which is not requested
    let err = compile_request(r#"{"metrics": ["units_sold"], "dimensions": ["country"]}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnresolvableJoin { ref tables } if tables == &vec!["customers".to_string()]
    ));
    assert_eq!(err.to_string(), "Cannot resolve joins for tables: customers");
}

#[test]
fn test_invalid_order_direction() {
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_order_by(OrderBy::with_direction("revenue", "sideways"));
    let err = compile(&shop_model(), &request).unwrap_err();
    assert!(matches!(err, CompileError::InvalidOrderDirection(ref d) if d == "sideways"));
}

#[test]
fn test_order_direction_is_case_insensitive() {
    let sql = compile_request(
        r#"{"metrics": ["revenue"], "order_by": {"field": "revenue", "direction": "Desc"}}"#,
    )
    .unwrap();
    assert!(sql.ends_with("ORDER BY revenue DESC"));
}

#[test]
fn test_invalid_limit() {
    for limit in ["0", "-1", "2.5", "\"10\"", "true"] {
        let json = format!(r#"{{"metrics": ["revenue"], "limit": {limit}}}"#);
        assert!(
            matches!(compile_request(&json), Err(CompileError::InvalidLimit(_))),
            "limit {limit} should be rejected"
        );
    }
}

#[test]
fn test_large_limit_accepted() {
    let sql =
        compile_request(r#"{"metrics": ["revenue"], "limit": 18446744073709551615}"#).unwrap();
    assert!(sql.ends_with("\nLIMIT 18446744073709551615"));
}

#[test]
fn test_null_limit_is_absent() {
    let sql = compile_request(r#"{"metrics": ["revenue"], "limit": null}"#).unwrap();
    assert!(!sql.contains("LIMIT"));
}
