//! Error types for query compilation.
//!
//! Every failure aborts compilation at the point it is detected; there is no
//! partial output and no aggregation of multiple errors.

use thiserror::Error;

/// Errors that can occur while compiling a query request to SQL.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Query must contain at least one metric")]
    EmptyMetricList,

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Unknown field in filter: {0}")]
    UnknownFilterField(String),

    /// Required tables that could not be reached from the base table.
    #[error("Cannot resolve joins for tables: {}", .tables.join(", "))]
    UnresolvableJoin { tables: Vec<String> },

    #[error("Order by direction must be 'ASC' or 'DESC', got '{0}'")]
    InvalidOrderDirection(String),

    #[error("Limit must be a positive integer, got {0}")]
    InvalidLimit(String),

    #[error("Invalid query request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("Invalid semantic model: {0}")]
    Model(#[from] crate::config::LoadError),
}

pub type CompileResult<T> = Result<T, CompileError>;
