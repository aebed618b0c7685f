// src/model/join.rs
use serde::{Deserialize, Serialize};

/// A declared relationship between two tables.
///
/// `one` and `many` record the cardinality roles, but traversal treats the
/// edge as undirected: either side may be the already-joined table. The
/// condition is emitted verbatim whichever way the edge is walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinEdge {
    pub one: String,
    pub many: String,
    /// Join condition fragment, e.g. `orders.customer_id = customers.id`
    #[serde(default, rename = "join", alias = "on", skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
}

impl JoinEdge {
    pub fn new(one: impl Into<String>, many: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            many: many.into(),
            on: Some(on.into()),
        }
    }

    /// An edge with no condition; joins through it render as a bare `JOIN <table>`.
    pub fn unconditioned(one: impl Into<String>, many: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            many: many.into(),
            on: None,
        }
    }

    /// If exactly one side is `joined` and the other is still `pending`,
    /// returns the side this edge would bring in.
    pub fn reaches<F, G>(&self, joined: F, pending: G) -> Option<&str>
    where
        F: Fn(&str) -> bool,
        G: Fn(&str) -> bool,
    {
        if joined(&self.one) && pending(&self.many) {
            Some(&self.many)
        } else if joined(&self.many) && pending(&self.one) {
            Some(&self.one)
        } else {
            None
        }
    }
}
