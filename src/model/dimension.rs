// src/model/dimension.rs
use serde::{Deserialize, Serialize};

/// A dimension: a named, typically non-aggregate column scoped to one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDefinition {
    pub name: String,
    /// Owning physical table
    pub table: String,
    /// Unqualified column or expression
    pub sql: String,
}

impl DimensionDefinition {
    pub fn new(name: impl Into<String>, table: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            sql: sql.into(),
        }
    }

    /// The raw column qualified by its table, e.g. `orders.created_at`.
    pub fn qualified_column(&self) -> String {
        format!("{}.{}", self.table, self.sql)
    }
}
