//! Test utilities for SQL emission validation.
//!
//! Parses emitted SQL with sqlparser-rs to catch malformed output.

use sqlparser::dialect::BigQueryDialect;
use sqlparser::parser::Parser;

/// Validates that a SQL string parses as BigQuery SQL.
pub fn validate_sql(sql: &str) -> Result<(), String> {
    Parser::parse_sql(&BigQueryDialect {}, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL: {}\nSQL: {}", e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_sql() {
        validate_sql("SELECT SUM(orders.amount) AS revenue\nFROM orders").unwrap();
    }

    #[test]
    fn test_validate_invalid_sql() {
        assert!(validate_sql("SELEC * FORM orders").is_err());
    }
}
