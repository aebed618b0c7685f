//! Semantic model types.
//!
//! A [`SemanticModel`] maps business-facing metric and dimension names to
//! physical tables and SQL expressions, and declares the join edges between
//! those tables. It is built once and never mutated while compiling.

pub mod dimension;
pub mod join;
pub mod metric;

pub use dimension::DimensionDefinition;
pub use join::JoinEdge;
pub use metric::MetricDefinition;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The declarative document a model is loaded from.
///
/// Every section is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub metrics: Vec<MetricDefinition>,
    #[serde(default)]
    pub dimensions: Vec<DimensionDefinition>,
    #[serde(default)]
    pub joins: Vec<JoinEdge>,
}

/// The closed set of metrics, dimensions and join edges a compiler works over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "ModelDocument", into = "ModelDocument")]
pub struct SemanticModel {
    /// Declaration order, used for raw-sql scans
    metrics: Vec<MetricDefinition>,
    metric_index: HashMap<String, usize>,
    dimensions: Vec<DimensionDefinition>,
    dimension_index: HashMap<String, usize>,
    joins: Vec<JoinEdge>,
}

impl SemanticModel {
    pub fn new(
        metrics: Vec<MetricDefinition>,
        dimensions: Vec<DimensionDefinition>,
        joins: Vec<JoinEdge>,
    ) -> Self {
        let mut model = Self::default();
        for metric in metrics {
            model.insert_metric(metric);
        }
        for dimension in dimensions {
            model.insert_dimension(dimension);
        }
        model.joins = joins;
        model
    }

    pub fn with_metric(mut self, metric: MetricDefinition) -> Self {
        self.insert_metric(metric);
        self
    }

    pub fn with_dimension(mut self, dimension: DimensionDefinition) -> Self {
        self.insert_dimension(dimension);
        self
    }

    pub fn with_join(mut self, join: JoinEdge) -> Self {
        self.joins.push(join);
        self
    }

    /// Look up a metric by exact name.
    pub fn metric(&self, name: &str) -> Option<&MetricDefinition> {
        self.metric_index.get(name).map(|&i| &self.metrics[i])
    }

    /// Look up a dimension by exact name.
    pub fn dimension(&self, name: &str) -> Option<&DimensionDefinition> {
        self.dimension_index.get(name).map(|&i| &self.dimensions[i])
    }

    /// Metrics in declaration order.
    pub fn metrics(&self) -> &[MetricDefinition] {
        &self.metrics
    }

    /// Dimensions in declaration order.
    pub fn dimensions(&self) -> &[DimensionDefinition] {
        &self.dimensions
    }

    /// Join edges in declaration order.
    pub fn joins(&self) -> &[JoinEdge] {
        &self.joins
    }

    // A redefinition replaces the earlier entry but keeps its position.
    fn insert_metric(&mut self, metric: MetricDefinition) {
        match self.metric_index.get(&metric.name) {
            Some(&i) => self.metrics[i] = metric,
            None => {
                self.metric_index
                    .insert(metric.name.clone(), self.metrics.len());
                self.metrics.push(metric);
            }
        }
    }

    fn insert_dimension(&mut self, dimension: DimensionDefinition) {
        match self.dimension_index.get(&dimension.name) {
            Some(&i) => self.dimensions[i] = dimension,
            None => {
                self.dimension_index
                    .insert(dimension.name.clone(), self.dimensions.len());
                self.dimensions.push(dimension);
            }
        }
    }
}

impl From<ModelDocument> for SemanticModel {
    fn from(doc: ModelDocument) -> Self {
        SemanticModel::new(doc.metrics, doc.dimensions, doc.joins)
    }
}

impl From<SemanticModel> for ModelDocument {
    fn from(model: SemanticModel) -> Self {
        ModelDocument {
            metrics: model.metrics,
            dimensions: model.dimensions,
            joins: model.joins,
        }
    }
}
