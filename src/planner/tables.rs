//! Required-table analysis.
//!
//! This pass is also where unknown metric, dimension and filter names are
//! reported.

use std::collections::BTreeSet;

use crate::error::{CompileError, CompileResult};
use crate::model::SemanticModel;
use crate::planner::resolver::FieldResolver;
use crate::query::FilterClause;
use crate::sql::grain;

/// Collect the physical tables touched by a request's metrics, dimensions
/// and filters.
pub fn required_tables(
    model: &SemanticModel,
    metrics: &[String],
    dimensions: &[String],
    filters: &[FilterClause],
) -> CompileResult<BTreeSet<String>> {
    let mut tables = BTreeSet::new();

    for name in metrics {
        let metric = model
            .metric(name)
            .ok_or_else(|| CompileError::UnknownMetric(name.clone()))?;
        tables.insert(metric.table.clone());
    }

    for reference in dimensions {
        let base = grain::base_name(reference);
        let dimension = model
            .dimension(base)
            .ok_or_else(|| CompileError::UnknownDimension(base.to_string()))?;
        tables.insert(dimension.table.clone());
    }

    let resolver = FieldResolver::new(model);
    for filter in filters {
        let field = resolver
            .resolve(grain::base_name(&filter.field))
            .ok_or_else(|| CompileError::UnknownFilterField(filter.field.clone()))?;
        tables.insert(field.table().to_string());
    }

    tracing::trace!(?tables, "required tables");
    Ok(tables)
}
