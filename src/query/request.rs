//! Query request types, deserializable from the JSON request format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A declarative analytics query.
///
/// Metrics and dimensions are emitted in the order listed here. Dimension
/// references may carry a grain suffix (`created_at__month`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use = "builders have no effect until used"]
pub struct QueryRequest {
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterClause>,
    #[serde(default)]
    pub order_by: Option<OrderBy>,
    #[serde(default)]
    pub limit: Option<Limit>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a request from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter(mut self, filter: FilterClause) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_limit(mut self, rows: u64) -> Self {
        self.limit = Some(Limit::Rows(rows));
        self
    }
}

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    /// Dimension or metric name, or a raw sql expression of one. A grain
    /// suffix is accepted and ignored.
    pub field: String,
    /// SQL operator token, inserted verbatim (`=`, `>`, `IN`, ...)
    pub operator: String,
    /// Scalar or list literal
    pub value: Value,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// ORDER BY specification. The field is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    /// `asc` or `desc` in any case; ascending when absent
    #[serde(default)]
    pub direction: Option<String>,
}

impl OrderBy {
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some("DESC".into()),
        }
    }

    pub fn with_direction(field: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(direction.into()),
        }
    }
}

/// A requested row limit.
///
/// Anything that is not a non-negative JSON integer lands in `Other` so the
/// compiler can reject it with a proper error instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Limit {
    Rows(u64),
    Other(Value),
}
