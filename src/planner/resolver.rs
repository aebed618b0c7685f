//! Field resolution.

use crate::model::{DimensionDefinition, MetricDefinition, SemanticModel};

/// What a field name resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedField<'a> {
    Dimension(&'a DimensionDefinition),
    Metric(&'a MetricDefinition),
}

impl<'a> ResolvedField<'a> {
    /// Owning table of the resolved definition.
    pub fn table(&self) -> &'a str {
        match self {
            ResolvedField::Dimension(d) => &d.table,
            ResolvedField::Metric(m) => &m.table,
        }
    }
}

/// Resolves bare field names against a model.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    model: &'a SemanticModel,
}

impl<'a> FieldResolver<'a> {
    pub fn new(model: &'a SemanticModel) -> Self {
        Self { model }
    }

    /// Resolve a name to a dimension or metric.
    ///
    /// First match wins:
    /// 1. dimension name
    /// 2. metric name
    /// 3. a dimension whose raw sql equals `name`
    /// 4. a metric whose raw sql equals `name`
    ///
    /// A name shared by a dimension and a metric therefore always resolves
    /// to the dimension.
    pub fn resolve(&self, name: &str) -> Option<ResolvedField<'a>> {
        if let Some(dim) = self.model.dimension(name) {
            return Some(ResolvedField::Dimension(dim));
        }
        if let Some(metric) = self.model.metric(name) {
            return Some(ResolvedField::Metric(metric));
        }
        if let Some(dim) = self.model.dimensions().iter().find(|d| d.sql == name) {
            return Some(ResolvedField::Dimension(dim));
        }
        self.model
            .metrics()
            .iter()
            .find(|m| m.sql == name)
            .map(ResolvedField::Metric)
    }
}
