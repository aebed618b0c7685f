//! Query requests: what a caller asks the compiler for.

mod request;

pub use request::{FilterClause, Limit, OrderBy, QueryRequest};
