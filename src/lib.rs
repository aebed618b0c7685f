//! # Quarry
//!
//! A semantic query compiler: turns a request for named metrics and
//! dimensions into a single SQL statement.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        SemanticModel (metrics, dimensions, joins)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [planner::tables]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Required tables + base table                │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [planner::join_builder]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     JOIN clauses                         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [planner::clauses]
//! ┌─────────────────────────────────────────────────────────┐
//! │       SelectStatement → SQL text (BigQuery syntax)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Compilation is pure: no I/O, no shared mutable state. A model is loaded
//! once and borrowed by every compilation.

pub mod compile;
pub mod config;
pub mod error;
pub mod model;
pub mod planner;
pub mod query;
pub mod sql;

pub use compile::{compile, compile_json, Compiler};
pub use config::{load_model_from_file, load_model_from_str, LoadError, ModelFormat};
pub use error::{CompileError, CompileResult};
pub use model::{DimensionDefinition, JoinEdge, MetricDefinition, SemanticModel};
pub use query::{FilterClause, Limit, OrderBy, QueryRequest};
pub use sql::SelectStatement;
