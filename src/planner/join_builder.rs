//! Join path resolution over the model's declared join edges.

use std::collections::{BTreeSet, HashSet};

use crate::error::{CompileError, CompileResult};
use crate::model::{JoinEdge, SemanticModel};
use crate::sql::query::JoinClause;

pub struct JoinBuilder<'a> {
    edges: &'a [JoinEdge],
}

impl<'a> JoinBuilder<'a> {
    pub fn new(model: &'a SemanticModel) -> Self {
        Self {
            edges: model.joins(),
        }
    }

    /// Build the JOIN clauses connecting every required table to `base`.
    ///
    /// Repeated passes over the edges in declaration order; within a pass an
    /// edge fires as soon as one side is joined and the other still pending,
    /// so tables reached earlier in the pass can be extended from immediately.
    /// This is first-fit, not shortest-path: for ambiguous graphs the edge
    /// declared first wins. A pass that joins nothing ends resolution with
    /// [`CompileError::UnresolvableJoin`].
    pub fn resolve_path(
        &self,
        base: &str,
        required: &BTreeSet<String>,
    ) -> CompileResult<Vec<JoinClause>> {
        if required.len() <= 1 {
            return Ok(Vec::new());
        }

        let mut joined: HashSet<&str> = HashSet::from([base]);
        let mut pending: BTreeSet<&str> = required
            .iter()
            .map(String::as_str)
            .filter(|table| *table != base)
            .collect();
        let mut joins = Vec::with_capacity(pending.len());

        // Every productive pass joins at least one table
        let max_passes = pending.len();
        for pass in 0..max_passes {
            if pending.is_empty() {
                break;
            }

            let mut progressed = false;
            for edge in self.edges {
                let reached = edge.reaches(|t| joined.contains(t), |t| pending.contains(t));
                if let Some(table) = reached {
                    tracing::trace!(pass, table, one = %edge.one, many = %edge.many, "joined table");
                    pending.remove(table);
                    joined.insert(table);
                    joins.push(JoinClause::new(table, edge.on.clone()));
                    progressed = true;
                }
            }

            if !progressed {
                break;
            }
        }

        if !pending.is_empty() {
            let tables: Vec<String> = pending.iter().map(|t| t.to_string()).collect();
            tracing::debug!(base, ?tables, "join resolution stalled");
            return Err(CompileError::UnresolvableJoin { tables });
        }

        Ok(joins)
    }
}
