// src/model/metric.rs
use serde::{Deserialize, Serialize};

/// A metric: a named SQL expression, usually an aggregate, evaluated in its
/// table's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub name: String,
    /// Owning physical table
    pub table: String,
    /// SQL expression, inserted verbatim
    pub sql: String,
}

impl MetricDefinition {
    pub fn new(name: impl Into<String>, table: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            sql: sql.into(),
        }
    }
}
