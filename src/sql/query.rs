//! The compiled SELECT statement and its text rendering.
//!
//! Layout is fixed so output is byte-for-byte reproducible:
//!
//! ```text
//! SELECT <item>,
//!        <item>
//! FROM <base>
//! JOIN <table> ON <condition>
//! WHERE <cond> AND <cond>
//! GROUP BY <expr>, <expr>
//! HAVING <cond> AND <cond>
//! ORDER BY <field> <DIR>
//! LIMIT <n>
//! ```

use std::fmt;

/// Separator between SELECT items: a comma, newline, and indent under `SELECT `.
const SELECT_ITEM_SEPARATOR: &str = ",\n       ";

// =============================================================================
// Select Item
// =============================================================================

/// A SELECT list item: expression with alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub expr: String,
    pub alias: String,
}

impl SelectItem {
    pub fn new(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: alias.into(),
        }
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AS {}", self.expr, self.alias)
    }
}

// =============================================================================
// Joins
// =============================================================================

/// A JOIN clause bringing one table into the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub table: String,
    pub on: Option<String>,
}

impl JoinClause {
    pub fn new(table: impl Into<String>, on: Option<String>) -> Self {
        Self {
            table: table.into(),
            on,
        }
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.on {
            Some(on) => write!(f, "JOIN {} ON {}", self.table, on),
            None => write!(f, "JOIN {}", self.table),
        }
    }
}

// =============================================================================
// ORDER BY
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Parse a direction case-insensitively.
    pub fn parse(direction: &str) -> Option<SortDir> {
        match direction.to_uppercase().as_str() {
            "ASC" => Some(SortDir::Asc),
            "DESC" => Some(SortDir::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause. The field is caller-supplied and emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    pub field: String,
    pub dir: SortDir,
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORDER BY {} {}", self.field, self.dir.as_str())
    }
}

// =============================================================================
// Statement
// =============================================================================

/// A fully resolved SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub select: Vec<SelectItem>,
    pub from: String,
    pub joins: Vec<JoinClause>,
    pub where_conditions: Vec<String>,
    pub group_by: Vec<String>,
    pub having_conditions: Vec<String>,
    pub order_by: Option<OrderByClause>,
    pub limit: Option<u64>,
}

impl SelectStatement {
    /// Render clauses in fixed order, one per line, no terminator.
    pub fn to_sql(&self) -> String {
        let mut lines = Vec::with_capacity(6 + self.joins.len());

        let items: Vec<String> = self.select.iter().map(ToString::to_string).collect();
        lines.push(format!("SELECT {}", items.join(SELECT_ITEM_SEPARATOR)));
        lines.push(format!("FROM {}", self.from));
        lines.extend(self.joins.iter().map(ToString::to_string));

        if !self.where_conditions.is_empty() {
            lines.push(format!("WHERE {}", self.where_conditions.join(" AND ")));
        }
        if !self.group_by.is_empty() {
            lines.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }
        if !self.having_conditions.is_empty() {
            lines.push(format!("HAVING {}", self.having_conditions.join(" AND ")));
        }
        if let Some(order_by) = &self.order_by {
            lines.push(order_by.to_string());
        }
        if let Some(limit) = self.limit {
            lines.push(format!("LIMIT {limit}"));
        }

        lines.join("\n")
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
