//! End-to-end compilation from a query request to SQL.
//!
//! ```text
//! Request → Required Tables → Join Path → Clauses → SQL
//! ```
//!
//! # Example
//!
//! ```
//! use quarry::compile::Compiler;
//! use quarry::model::{DimensionDefinition, MetricDefinition, SemanticModel};
//! use quarry::query::QueryRequest;
//!
//! let model = SemanticModel::default()
//!     .with_metric(MetricDefinition::new("revenue", "orders", "SUM(orders.amount)"))
//!     .with_dimension(DimensionDefinition::new("created_at", "orders", "created_at"));
//!
//! let request = QueryRequest::new()
//!     .with_metrics(["revenue"])
//!     .with_dimensions(["created_at__month"]);
//!
//! let sql = Compiler::new(&model).compile(&request)?;
//! assert_eq!(
//!     sql,
//!     "SELECT DATE_TRUNC(orders.created_at, MONTH) AS created_at__month,\n       \
//!      SUM(orders.amount) AS revenue\n\
//!      FROM orders\n\
//!      GROUP BY DATE_TRUNC(orders.created_at, MONTH)"
//! );
//! # Ok::<(), quarry::CompileError>(())
//! ```

use crate::config::{load_model_from_str, ModelFormat};
use crate::error::{CompileError, CompileResult};
use crate::model::SemanticModel;
use crate::planner::{required_tables, ClauseBuilder, JoinBuilder};
use crate::query::QueryRequest;
use crate::sql::query::SelectStatement;

/// Compiles query requests against one semantic model.
///
/// Holds only a shared reference to the model, so one compiler can serve
/// any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'a> {
    model: &'a SemanticModel,
}

impl<'a> Compiler<'a> {
    pub fn new(model: &'a SemanticModel) -> Self {
        Self { model }
    }

    /// Resolve a request into a statement without rendering it.
    pub fn plan(&self, request: &QueryRequest) -> CompileResult<SelectStatement> {
        // Step 1: Validate metrics
        let Some(first_metric) = request.metrics.first() else {
            return Err(CompileError::EmptyMetricList);
        };

        // Step 2: Required tables (also reports unknown names)
        let tables = required_tables(
            self.model,
            &request.metrics,
            &request.dimensions,
            &request.filters,
        )?;
        let base_table = self
            .model
            .metric(first_metric)
            .map(|m| m.table.clone())
            .ok_or_else(|| CompileError::UnknownMetric(first_metric.clone()))?;

        tracing::debug!(
            base_table = %base_table,
            tables = tables.len(),
            metrics = request.metrics.len(),
            dimensions = request.dimensions.len(),
            filters = request.filters.len(),
            "planning query"
        );

        // Step 3: SELECT
        let clauses = ClauseBuilder::new(self.model);
        let select = clauses.select_items(&request.metrics, &request.dimensions)?;

        // Step 4: FROM / JOIN
        let joins = JoinBuilder::new(self.model).resolve_path(&base_table, &tables)?;

        // Step 5: WHERE / HAVING
        let filters = clauses.filter_conditions(&request.filters)?;

        // Step 6: GROUP BY
        let group_by = clauses.group_by(&request.dimensions)?;

        // Steps 7-8: ORDER BY, LIMIT
        let order_by = clauses.order_by(request.order_by.as_ref())?;
        let limit = clauses.limit(request.limit.as_ref())?;

        Ok(SelectStatement {
            select,
            from: base_table,
            joins,
            where_conditions: filters.where_conditions,
            group_by,
            having_conditions: filters.having_conditions,
            order_by,
            limit,
        })
    }

    /// Compile a request to SQL text.
    pub fn compile(&self, request: &QueryRequest) -> CompileResult<String> {
        let sql = self.plan(request)?.to_sql();
        tracing::trace!(%sql, "compiled query");
        Ok(sql)
    }
}

/// Compile a single request against a model.
pub fn compile(model: &SemanticModel, request: &QueryRequest) -> CompileResult<String> {
    Compiler::new(model).compile(request)
}

/// Compile from raw JSON documents: a semantic model and a query request.
pub fn compile_json(model_json: &str, request_json: &str) -> CompileResult<String> {
    let model = load_model_from_str(model_json, ModelFormat::Json)?;
    let request = QueryRequest::from_json(request_json)?;
    compile(&model, &request)
}
