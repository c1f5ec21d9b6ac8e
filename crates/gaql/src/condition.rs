//! Filter condition primitives.
//!
//! This module provides [`CmpOp`] (comparison operator), [`SortOrder`],
//! and [`Condition`], the validated `WHERE` fragment the builder
//! accumulates. A `Condition` can only be obtained through constructors
//! that validate the field name, the values, and any match pattern, so
//! holding one means the fragment inside is safe to embed.
//!
//! # Example
//! ```ignore
//! use gaql::Condition;
//!
//! let c = Condition::eq("campaign.status", "ENABLED")?;
//! assert_eq!(c.as_str(), "campaign.status = 'ENABLED'");
//!
//! let c = Condition::in_list("segments.device", vec!["MOBILE", "TABLET"])?;
//! assert_eq!(c.as_str(), "segments.device IN ('MOBILE', 'TABLET')");
//! # Ok::<(), gaql::GaqlError>(())
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date;
use crate::error::{GaqlError, GaqlResult};
use crate::ident;
use crate::limits;
use crate::pattern;
use crate::value::{Value, escape_pattern};

/// Comparison operator for scalar conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    /// Equal: field = value
    Eq,
    /// Not equal: field != value
    Ne,
    /// Greater than: field > value
    Gt,
    /// Greater than or equal: field >= value
    Gte,
    /// Less than: field < value
    Lt,
    /// Less than or equal: field <= value
    Lte,
}

impl CmpOp {
    /// The operator's query-string spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
        }
    }
}

impl std::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CmpOp {
    type Err = GaqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(CmpOp::Eq),
            "!=" => Ok(CmpOp::Ne),
            ">" => Ok(CmpOp::Gt),
            ">=" => Ok(CmpOp::Gte),
            "<" => Ok(CmpOp::Lt),
            "<=" => Ok(CmpOp::Lte),
            _ => Err(GaqlError::validation(
                "one of =, !=, >, >=, <, <=",
                format!("'{s}'"),
            )),
        }
    }
}

/// Sort direction for `ORDER BY` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending (the default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// The direction's query-string spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `WHERE` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition(pub(crate) String);

impl Condition {
    /// Create a scalar comparison condition: `field <op> value`.
    pub fn cmp(field: &str, op: CmpOp, value: impl Into<Value>) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        let value = value.into();
        value.validate()?;
        Ok(Condition(format!("{field} {op} {value}")))
    }

    // ==================== Convenience constructors ====================

    /// Create an equality condition: field = value
    pub fn eq(field: &str, value: impl Into<Value>) -> GaqlResult<Self> {
        Self::cmp(field, CmpOp::Eq, value)
    }

    /// Create an inequality condition: field != value
    pub fn ne(field: &str, value: impl Into<Value>) -> GaqlResult<Self> {
        Self::cmp(field, CmpOp::Ne, value)
    }

    /// Create a greater-than condition: field > value
    pub fn gt(field: &str, value: impl Into<Value>) -> GaqlResult<Self> {
        Self::cmp(field, CmpOp::Gt, value)
    }

    /// Create a greater-than-or-equal condition: field >= value
    pub fn gte(field: &str, value: impl Into<Value>) -> GaqlResult<Self> {
        Self::cmp(field, CmpOp::Gte, value)
    }

    /// Create a less-than condition: field < value
    pub fn lt(field: &str, value: impl Into<Value>) -> GaqlResult<Self> {
        Self::cmp(field, CmpOp::Lt, value)
    }

    /// Create a less-than-or-equal condition: field <= value
    pub fn lte(field: &str, value: impl Into<Value>) -> GaqlResult<Self> {
        Self::cmp(field, CmpOp::Lte, value)
    }

    /// Create an IN condition: field IN (values...)
    pub fn in_list<T: Into<Value>>(field: &str, values: Vec<T>) -> GaqlResult<Self> {
        Self::list(field, "IN", values)
    }

    /// Create a NOT IN condition: field NOT IN (values...)
    pub fn not_in<T: Into<Value>>(field: &str, values: Vec<T>) -> GaqlResult<Self> {
        Self::list(field, "NOT IN", values)
    }

    /// Create a LIKE condition: field LIKE 'pattern'
    pub fn like(field: &str, pattern: &str) -> GaqlResult<Self> {
        Self::pattern_op(field, "LIKE", pattern)
    }

    /// Create a NOT LIKE condition: field NOT LIKE 'pattern'
    pub fn not_like(field: &str, pattern: &str) -> GaqlResult<Self> {
        Self::pattern_op(field, "NOT LIKE", pattern)
    }

    /// Create a REGEXP_MATCH condition: field REGEXP_MATCH 'pattern'
    pub fn regexp_match(field: &str, pattern: &str) -> GaqlResult<Self> {
        Self::pattern_op(field, "REGEXP_MATCH", pattern)
    }

    /// Create a NOT REGEXP_MATCH condition: field NOT REGEXP_MATCH 'pattern'
    pub fn not_regexp_match(field: &str, pattern: &str) -> GaqlResult<Self> {
        Self::pattern_op(field, "NOT REGEXP_MATCH", pattern)
    }

    /// Create an IS NULL condition: field IS NULL
    pub fn is_null(field: &str) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        Ok(Condition(format!("{field} IS NULL")))
    }

    /// Create an IS NOT NULL condition: field IS NOT NULL
    pub fn is_not_null(field: &str) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        Ok(Condition(format!("{field} IS NOT NULL")))
    }

    /// Create a BETWEEN condition: field BETWEEN low AND high
    pub fn between(
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        let low = low.into();
        let high = high.into();
        low.validate()?;
        high.validate()?;
        Ok(Condition(format!("{field} BETWEEN {low} AND {high}")))
    }

    /// Create a CONTAINS ALL condition: field CONTAINS ALL (values...)
    pub fn contains_all<T: Into<Value>>(field: &str, values: Vec<T>) -> GaqlResult<Self> {
        Self::list(field, "CONTAINS ALL", values)
    }

    /// Create a CONTAINS ANY condition: field CONTAINS ANY (values...)
    pub fn contains_any<T: Into<Value>>(field: &str, values: Vec<T>) -> GaqlResult<Self> {
        Self::list(field, "CONTAINS ANY", values)
    }

    /// Create a CONTAINS NONE condition: field CONTAINS NONE (values...)
    pub fn contains_none<T: Into<Value>>(field: &str, values: Vec<T>) -> GaqlResult<Self> {
        Self::list(field, "CONTAINS NONE", values)
    }

    /// Create a DURING condition over a relative range token or an
    /// absolute date: `field DURING LAST_30_DAYS`, `field DURING
    /// '2024-02-29'`.
    pub fn during(field: &str, value: &str) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        let rendered = date::validate_date_value(value)?;
        Ok(Condition(format!("{field} DURING {rendered}")))
    }

    /// The rendered fragment.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn list<T: Into<Value>>(
        field: &str,
        keyword: &'static str,
        values: Vec<T>,
    ) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        if values.is_empty() {
            return Err(GaqlError::validation(
                format!("a non-empty list of values for {keyword}"),
                "an empty list",
            ));
        }
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        for value in &values {
            value.validate()?;
        }
        limits::check_count("list values", limits::MAX_LIST_VALUES, values.len())?;

        let mut rendered = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(&value.to_string());
        }
        Ok(Condition(format!("{field} {keyword} ({rendered})")))
    }

    fn pattern_op(field: &str, keyword: &'static str, pattern: &str) -> GaqlResult<Self> {
        ident::validate_field_name(field)?;
        pattern::check_pattern(pattern)?;
        Ok(Condition(format!("{field} {keyword} '{}'", escape_pattern(pattern))))
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
