//! Query planning: resolves request fields against the semantic model and
//! builds the pieces of the final statement.
//!
//! 1. [`resolver`] - name or raw-sql lookup of dimensions and metrics
//! 2. [`tables`] - which physical tables a request touches
//! 3. [`join_builder`] - JOIN clauses connecting those tables to the base table
//! 4. [`clauses`] - SELECT, WHERE/HAVING, GROUP BY, ORDER BY, LIMIT

pub mod clauses;
pub mod join_builder;
pub mod resolver;
pub mod tables;

pub use clauses::{ClauseBuilder, FilterConditions};
pub use join_builder::JoinBuilder;
pub use resolver::{FieldResolver, ResolvedField};
pub use tables::required_tables;
