//! SQL generation module.
//!
//! - [`literal`] - filter value rendering
//! - [`grain`] - time-granularity truncation of dimension references
//! - [`query`] - the SELECT statement value and its text rendering
//!
//! Output targets BigQuery's `DATE_TRUNC(<column>, <GRAIN>)` form.

pub mod grain;
pub mod literal;
pub mod query;

#[cfg(test)]
pub mod test_utils;

pub use grain::TimeGrain;
pub use literal::format_value;
pub use query::{JoinClause, OrderByClause, SelectItem, SelectStatement, SortDir};
