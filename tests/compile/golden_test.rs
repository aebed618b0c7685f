//! Golden-output tests for the full request → SQL pipeline.

#[path = "../common/mod.rs"]
mod common;

use common::{assert_parses, shop_model};
use insta::assert_snapshot;
use quarry::{
    Compiler, DimensionDefinition, FilterClause, MetricDefinition, OrderBy, QueryRequest,
    SemanticModel,
};
use serde_json::json;

// ============================================================================
// Single-table queries
// ============================================================================

#[test]
fn test_revenue_by_month() {
    let model = SemanticModel::default()
        .with_metric(MetricDefinition::new("revenue", "orders", "SUM(orders.amount)"))
        .with_dimension(DimensionDefinition::new("created_at", "orders", "created_at"));

    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_dimensions(["created_at__month"]);

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_snapshot!(sql, @r"
    SELECT DATE_TRUNC(orders.created_at, MONTH) AS created_at__month,
           SUM(orders.amount) AS revenue
    FROM orders
    GROUP BY DATE_TRUNC(orders.created_at, MONTH)
    ");
    assert_parses(&sql);
}

#[test]
fn test_metrics_only_has_no_join_or_group_by() {
    let model = shop_model();
    let request = QueryRequest::new().with_metrics(["revenue", "order_count"]);

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_eq!(
        sql,
        "SELECT SUM(orders.amount) AS revenue,\n       COUNT(orders.id) AS order_count\nFROM orders"
    );
    assert!(!sql.contains("JOIN"));
    assert!(!sql.contains("GROUP BY"));
}

#[test]
fn test_grained_filter_compares_raw_column() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_dimensions(["created_at__month"])
        .with_filter(FilterClause::new("created_at__month", ">=", "2024-01-01"));

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_snapshot!(sql, @r"
    SELECT DATE_TRUNC(orders.created_at, MONTH) AS created_at__month,
           SUM(orders.amount) AS revenue
    FROM orders
    WHERE orders.created_at >= '2024-01-01'
    GROUP BY DATE_TRUNC(orders.created_at, MONTH)
    ");
}

// ============================================================================
// Joined queries
// ============================================================================

#[test]
fn test_full_clause_set() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_dimensions(["country", "created_at__year"])
        .with_filter(FilterClause::new("status", "IN", json!(["paid", "shipped"])))
        .with_filter(FilterClause::new("revenue", ">", 1000))
        .with_filter(FilterClause::new("created_at", ">=", "2024-01-01"))
        .with_order_by(OrderBy::with_direction("revenue", "desc"))
        .with_limit(10);

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_snapshot!(sql, @r"
    SELECT customers.country AS country,
           DATE_TRUNC(orders.created_at, YEAR) AS created_at__year,
           SUM(orders.amount) AS revenue
    FROM orders
    JOIN customers ON orders.customer_id = customers.id
    WHERE orders.status IN ('paid','shipped') AND orders.created_at >= '2024-01-01'
    GROUP BY customers.country, DATE_TRUNC(orders.created_at, YEAR)
    HAVING SUM(orders.amount) > 1000
    ORDER BY revenue DESC
    LIMIT 10
    ");
    assert_parses(&sql);
}

#[test]
fn test_join_from_one_side() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["customer_count"])
        .with_dimensions(["status"]);

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_snapshot!(sql, @r"
    SELECT orders.status AS status,
           COUNT(DISTINCT customers.id) AS customer_count
    FROM customers
    JOIN orders ON orders.customer_id = customers.id
    GROUP BY orders.status
    ");
}

#[test]
fn test_multi_hop_joins() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["units_sold"])
        .with_dimensions(["region_name", "category", "status", "country"]);

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_snapshot!(sql, @r"
    SELECT regions.name AS region_name,
           products.category AS category,
           orders.status AS status,
           customers.country AS country,
           SUM(order_items.quantity) AS units_sold
    FROM order_items
    JOIN orders ON order_items.order_id = orders.id
    JOIN products ON order_items.product_id = products.id
    JOIN customers ON orders.customer_id = customers.id
    JOIN regions ON customers.region_id = regions.id
    GROUP BY regions.name, products.category, orders.status, customers.country
    ");
    assert_parses(&sql);
}

#[test]
fn test_filter_only_table_is_joined() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_filter(FilterClause::new("country", "=", "US"));

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert_eq!(
        sql,
        "SELECT SUM(orders.amount) AS revenue\n\
         FROM orders\n\
         JOIN customers ON orders.customer_id = customers.id\n\
         WHERE customers.country = 'US'"
    );
}

// ============================================================================
// Resolution policy
// ============================================================================

#[test]
fn test_metric_filter_goes_to_having() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_dimensions(["status"])
        .with_filter(FilterClause::new("order_count", ">=", 5));

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert!(sql.contains("HAVING COUNT(orders.id) >= 5"));
    assert!(!sql.contains("WHERE"));
}

#[test]
fn test_name_collision_resolves_to_dimension() {
    let model = SemanticModel::default()
        .with_metric(MetricDefinition::new("revenue", "orders", "SUM(orders.amount)"))
        .with_metric(MetricDefinition::new("status", "orders", "COUNT(orders.status)"))
        .with_dimension(DimensionDefinition::new("status", "orders", "status"));

    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_filter(FilterClause::new("status", "=", "paid"));

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert!(sql.contains("WHERE orders.status = 'paid'"));
    assert!(!sql.contains("HAVING"));
}

#[test]
fn test_filter_by_raw_sql_expression() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_filter(FilterClause::new("SUM(orders.amount)", "<", 50.5));

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert!(sql.ends_with("HAVING SUM(orders.amount) < 50.5"));
}

#[test]
fn test_order_by_field_is_verbatim() {
    let model = shop_model();
    let request = QueryRequest::new()
        .with_metrics(["revenue"])
        .with_dimensions(["status"])
        .with_order_by(OrderBy {
            field: "2".into(),
            direction: None,
        });

    let sql = Compiler::new(&model).compile(&request).unwrap();
    assert!(sql.ends_with("GROUP BY orders.status\nORDER BY 2 ASC"));
}
