//! Rendering of filter values as SQL literals.

use serde_json::Value;

/// Quote string with single quotes, doubling embedded quotes.
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Render a filter value as a SQL literal or parenthesized literal list.
///
/// Lists render as `(a,b,c)` with no spaces, ready for `IN`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_string_single(s),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(format_value).collect();
            format!("({})", rendered.join(","))
        }
        Value::Object(_) => quote_string_single(&value.to_string()),
    }
}
