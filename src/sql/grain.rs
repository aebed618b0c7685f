//! Time-granularity handling for dimension references.
//!
//! A reference such as `created_at__month` names the dimension `created_at`
//! and asks for its column truncated to the month.

/// Separator between a dimension name and its grain suffix.
pub const GRAIN_SEPARATOR: &str = "__";

/// Supported truncation grains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeGrain {
    Week,
    Month,
    Year,
}

impl TimeGrain {
    /// Detection order when a reference is scanned for a grain token.
    const PRIORITY: [TimeGrain; 3] = [TimeGrain::Week, TimeGrain::Month, TimeGrain::Year];

    /// The suffix token, e.g. `__month`.
    pub fn token(self) -> &'static str {
        match self {
            TimeGrain::Week => "__week",
            TimeGrain::Month => "__month",
            TimeGrain::Year => "__year",
        }
    }

    /// The date part keyword passed to `DATE_TRUNC`.
    pub fn date_part(self) -> &'static str {
        match self {
            TimeGrain::Week => "WEEK",
            TimeGrain::Month => "MONTH",
            TimeGrain::Year => "YEAR",
        }
    }

    /// Find the grain a reference asks for.
    ///
    /// Matching is by substring, first of week/month/year wins. Any other
    /// suffix (`__day`, `__raw`) yields `None`.
    pub fn detect(reference: &str) -> Option<TimeGrain> {
        Self::PRIORITY
            .into_iter()
            .find(|grain| reference.contains(grain.token()))
    }

    /// Truncate a qualified column to this grain.
    pub fn truncate(self, column: &str) -> String {
        format!("DATE_TRUNC({}, {})", column, self.date_part())
    }
}

/// The dimension name a reference points at: everything before the first `__`.
pub fn base_name(reference: &str) -> &str {
    reference
        .split(GRAIN_SEPARATOR)
        .next()
        .unwrap_or(reference)
}

/// Expand a dimension reference into its SQL expression.
///
/// Grained references become a truncation of the table-qualified raw column;
/// everything else is the plain qualified column. SELECT and GROUP BY both go
/// through here so the two always match.
pub fn expand(reference: &str, table: &str, raw_sql: &str) -> String {
    let column = format!("{table}.{raw_sql}");
    match TimeGrain::detect(reference) {
        Some(grain) => grain.truncate(&column),
        None => column,
    }
}
