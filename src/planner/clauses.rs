//! Clause construction for SELECT, WHERE/HAVING, GROUP BY, ORDER BY and LIMIT.

use crate::error::{CompileError, CompileResult};
use crate::model::{DimensionDefinition, SemanticModel};
use crate::planner::resolver::{FieldResolver, ResolvedField};
use crate::query::{FilterClause, Limit, OrderBy};
use crate::sql::grain;
use crate::sql::literal::format_value;
use crate::sql::query::{OrderByClause, SelectItem, SortDir};

/// Filter conditions split by where they are evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConditions {
    /// Dimension filters, applied before aggregation
    pub where_conditions: Vec<String>,
    /// Metric filters, applied after aggregation
    pub having_conditions: Vec<String>,
}

pub struct ClauseBuilder<'a> {
    model: &'a SemanticModel,
    resolver: FieldResolver<'a>,
}

impl<'a> ClauseBuilder<'a> {
    pub fn new(model: &'a SemanticModel) -> Self {
        Self {
            model,
            resolver: FieldResolver::new(model),
        }
    }

    /// SELECT items: every dimension in request order, then every metric in
    /// request order. Dimensions are aliased by their original reference.
    pub fn select_items(
        &self,
        metrics: &[String],
        dimensions: &[String],
    ) -> CompileResult<Vec<SelectItem>> {
        let mut items = Vec::with_capacity(dimensions.len() + metrics.len());

        for reference in dimensions {
            let dimension = self.dimension(reference)?;
            let expr = grain::expand(reference, &dimension.table, &dimension.sql);
            items.push(SelectItem::new(expr, reference.as_str()));
        }

        for name in metrics {
            let metric = self
                .model
                .metric(name)
                .ok_or_else(|| CompileError::UnknownMetric(name.clone()))?;
            items.push(SelectItem::new(metric.sql.as_str(), metric.name.as_str()));
        }

        Ok(items)
    }

    /// Route each filter to WHERE (dimension) or HAVING (metric).
    ///
    /// Dimension filters always compare the raw qualified column; a grain
    /// suffix on the filter field is ignored.
    pub fn filter_conditions(&self, filters: &[FilterClause]) -> CompileResult<FilterConditions> {
        let mut conditions = FilterConditions::default();

        for filter in filters {
            let field = self
                .resolver
                .resolve(grain::base_name(&filter.field))
                .ok_or_else(|| CompileError::UnknownFilterField(filter.field.clone()))?;
            let value = format_value(&filter.value);

            match field {
                ResolvedField::Metric(metric) => conditions
                    .having_conditions
                    .push(format!("{} {} {}", metric.sql, filter.operator, value)),
                ResolvedField::Dimension(dimension) => conditions.where_conditions.push(format!(
                    "{} {} {}",
                    dimension.qualified_column(),
                    filter.operator,
                    value
                )),
            }
        }

        Ok(conditions)
    }

    /// GROUP BY expressions, one per requested dimension, identical to the
    /// matching SELECT expressions.
    pub fn group_by(&self, dimensions: &[String]) -> CompileResult<Vec<String>> {
        dimensions
            .iter()
            .map(|reference| {
                let dimension = self.dimension(reference)?;
                Ok(grain::expand(reference, &dimension.table, &dimension.sql))
            })
            .collect()
    }

    /// Validate the ORDER BY direction. The field is passed through untouched.
    pub fn order_by(&self, order_by: Option<&OrderBy>) -> CompileResult<Option<OrderByClause>> {
        let Some(order_by) = order_by else {
            return Ok(None);
        };

        let dir = match order_by.direction.as_deref() {
            None => SortDir::Asc,
            Some(direction) => SortDir::parse(direction)
                .ok_or_else(|| CompileError::InvalidOrderDirection(direction.to_string()))?,
        };

        Ok(Some(OrderByClause {
            field: order_by.field.clone(),
            dir,
        }))
    }

    /// Validate the row limit: a present limit must be a positive integer.
    pub fn limit(&self, limit: Option<&Limit>) -> CompileResult<Option<u64>> {
        match limit {
            None => Ok(None),
            Some(Limit::Rows(rows)) if *rows >= 1 => Ok(Some(*rows)),
            Some(Limit::Rows(rows)) => Err(CompileError::InvalidLimit(rows.to_string())),
            Some(Limit::Other(value)) => Err(CompileError::InvalidLimit(value.to_string())),
        }
    }

    fn dimension(&self, reference: &str) -> CompileResult<&'a DimensionDefinition> {
        let base = grain::base_name(reference);
        self.model
            .dimension(base)
            .ok_or_else(|| CompileError::UnknownDimension(base.to_string()))
    }
}
