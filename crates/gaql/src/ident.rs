//! Safe GAQL name handling.
//!
//! Field and resource names are dot-separated paths (`campaign.id`,
//! `metrics.clicks`); the language has no quoted form, so the grammar is
//! closed:
//!
//! - Each segment must match `[A-Za-z_][A-Za-z0-9_]*`
//! - Selected fields may also be an aggregate call over exactly one
//!   field, e.g. `SUM(metrics.clicks)`
//! - Parameter names are a single segment (no dots)
//!
//! Anything outside the grammar is rejected before it can reach a query
//! string, which is what keeps caller-supplied names injection-proof.
//!
//! # Example
//! ```ignore
//! use gaql::ident;
//!
//! ident::validate_field_name("campaign.status")?;
//! ident::validate_field_name("SUM(metrics.clicks)")?;
//! assert!(ident::validate_resource_name("ad_group; DROP").is_err());
//! # Ok::<(), gaql::GaqlError>(())
//! ```

use crate::error::{GaqlError, GaqlResult};

/// Aggregate functions accepted in field position.
const AGGREGATE_FUNCTIONS: [&str; 5] = ["COUNT", "SUM", "AVG", "MIN", "MAX"];

/// Check a single name segment: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Check a dot-separated name: one or more valid segments.
///
/// Rejects empty input, leading/trailing dots, and empty segments
/// (`a..b`), since `split` yields an empty piece for each of those.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_segment)
}

/// Check an aggregate call: `FN(field)` where `FN` is one of
/// `COUNT`, `SUM`, `AVG`, `MIN`, `MAX` and `field` is a valid
/// dot-separated name.
pub fn is_valid_aggregate(name: &str) -> bool {
    let Some((func, rest)) = name.split_once('(') else {
        return false;
    };
    let Some(inner) = rest.strip_suffix(')') else {
        return false;
    };
    AGGREGATE_FUNCTIONS.contains(&func) && is_valid_identifier(inner)
}

/// Check a parameter name: a single segment, no dots.
pub fn is_valid_parameter_name(name: &str) -> bool {
    is_valid_segment(name)
}

/// Validate a field name (plain or aggregate form).
pub fn validate_field_name(name: &str) -> GaqlResult<()> {
    if is_valid_identifier(name) || is_valid_aggregate(name) {
        Ok(())
    } else {
        Err(GaqlError::validation(
            "field name of dot-separated segments matching [A-Za-z_][A-Za-z0-9_]*, \
             or an aggregate call like SUM(metrics.clicks)",
            format!("'{name}'"),
        ))
    }
}

/// Validate a resource name (plain form only).
pub fn validate_resource_name(name: &str) -> GaqlResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(GaqlError::validation(
            "resource name of dot-separated segments matching [A-Za-z_][A-Za-z0-9_]*",
            format!("'{name}'"),
        ))
    }
}

/// Validate a parameter name (single segment, no dots).
pub fn validate_parameter_name(name: &str) -> GaqlResult<()> {
    if is_valid_parameter_name(name) {
        Ok(())
    } else {
        Err(GaqlError::validation(
            "parameter name matching [A-Za-z_][A-Za-z0-9_]* with no dots",
            format!("'{name}'"),
        ))
    }
}
