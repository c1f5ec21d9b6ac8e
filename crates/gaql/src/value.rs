//! Literal values and their query-string rendering.
//!
//! [`Value`] is the closed set of literal types a condition can compare
//! against; [`ParameterValue`] is the narrower set accepted by the
//! trailing `PARAMETERS` clause. Both render through [`Display`]:
//!
//! - Strings are single-quoted; an embedded `'` is doubled to `''`.
//!   That doubling is the only escape mechanism the language has.
//! - Booleans render uppercase `TRUE` / `FALSE` in conditions, but
//!   lowercase `true` / `false` as parameter values.
//! - Numbers render in their shortest round-trip decimal form.
//! - `NULL` renders bare.
//!
//! [`Display`]: std::fmt::Display

use serde::{Deserialize, Serialize};

use crate::error::{GaqlError, GaqlResult};

/// A literal value in a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL literal
    Null,
    /// Boolean, rendered `TRUE` / `FALSE`
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String, rendered single-quoted with `'` doubled
    String(String),
}

impl Value {
    /// Reject values that have no literal form in the language.
    ///
    /// Only non-finite floats fail; every other variant always renders.
    /// Called by the condition constructors before any fragment is
    /// built, so an unrenderable value never reaches a query string.
    pub(crate) fn validate(&self) -> GaqlResult<()> {
        match self {
            Value::Float(n) if !n.is_finite() => Err(GaqlError::validation(
                "a finite number",
                format!("{n}"),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(true) => write!(f, "TRUE"),
            Value::Bool(false) => write!(f, "FALSE"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// A value in the `PARAMETERS` clause.
///
/// The clause accepts only booleans and numbers; strings are excluded by
/// construction, so no escaping question arises at this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    /// Boolean, rendered `true` / `false`
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
}

impl ParameterValue {
    /// Reject parameter values with no literal form (non-finite floats).
    pub(crate) fn validate(&self) -> GaqlResult<()> {
        match self {
            ParameterValue::Float(n) if !n.is_finite() => Err(GaqlError::validation(
                "a finite number",
                format!("{n}"),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Bool(b) => write!(f, "{}", b),
            ParameterValue::Int(n) => write!(f, "{}", n),
            ParameterValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        ParameterValue::Bool(b)
    }
}

impl From<i32> for ParameterValue {
    fn from(n: i32) -> Self {
        ParameterValue::Int(n as i64)
    }
}

impl From<i64> for ParameterValue {
    fn from(n: i64) -> Self {
        ParameterValue::Int(n)
    }
}

impl From<f64> for ParameterValue {
    fn from(n: f64) -> Self {
        ParameterValue::Float(n)
    }
}

/// Escape a LIKE / REGEXP pattern body for embedding in a quoted literal.
///
/// Doubles single quotes only; the caller supplies the surrounding
/// quotes. Pattern metacharacters are left untouched, they are part of
/// the pattern's meaning.
pub fn escape_pattern(pattern: &str) -> String {
    pattern.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_renders_quoted() {
        assert_eq!(Value::from("ENABLED").to_string(), "'ENABLED'");
    }

    #[test]
    fn string_doubles_embedded_quote() {
        assert_eq!(Value::from("O'Brien").to_string(), "'O''Brien'");
    }

    #[test]
    fn string_doubles_every_quote() {
        assert_eq!(
            Value::from("'; DROP TABLE x; --").to_string(),
            "'''; DROP TABLE x; --'"
        );
    }

    #[test]
    fn bool_renders_uppercase() {
        assert_eq!(Value::from(true).to_string(), "TRUE");
        assert_eq!(Value::from(false).to_string(), "FALSE");
    }

    #[test]
    fn null_renders_bare() {
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn int_renders_canonical() {
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(-7).to_string(), "-7");
    }

    #[test]
    fn float_renders_shortest_form() {
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(0.1).to_string(), "0.1");
    }

    #[test]
    fn option_none_becomes_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn nan_fails_validation() {
        let err = Value::Float(f64::NAN).validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn infinity_fails_validation() {
        assert!(Value::Float(f64::INFINITY).validate().is_err());
        assert!(Value::Float(f64::NEG_INFINITY).validate().is_err());
    }

    #[test]
    fn finite_values_pass_validation() {
        assert!(Value::Float(1.25).validate().is_ok());
        assert!(Value::from("any' string").validate().is_ok());
    }

    #[test]
    fn parameter_bool_renders_lowercase() {
        assert_eq!(ParameterValue::from(true).to_string(), "true");
        assert_eq!(ParameterValue::from(false).to_string(), "false");
    }

    #[test]
    fn parameter_numbers_render_canonical() {
        assert_eq!(ParameterValue::from(10i64).to_string(), "10");
        assert_eq!(ParameterValue::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn parameter_nan_fails_validation() {
        assert!(ParameterValue::Float(f64::NAN).validate().is_err());
    }

    #[test]
    fn escape_pattern_doubles_quotes_only() {
        assert_eq!(escape_pattern("it's .* fine"), "it''s .* fine");
        assert_eq!(escape_pattern("[a-z]+"), "[a-z]+");
    }
}
