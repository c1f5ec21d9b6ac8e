//! Structural ceilings for a single query.
//!
//! Every count a caller can grow is capped, and the cap is checked
//! before state changes, so a failed call leaves the builder exactly as
//! it was. The rendered-length ceiling is the one check that can only
//! run at render time.

use crate::error::{GaqlError, GaqlResult};

/// Maximum number of selected fields.
pub const MAX_SELECT_FIELDS: usize = 500;

/// Maximum number of filter conditions.
pub const MAX_CONDITIONS: usize = 100;

/// Maximum number of elements in one list-valued clause.
pub const MAX_LIST_VALUES: usize = 1000;

/// Maximum number of grouping keys.
pub const MAX_GROUP_BY_FIELDS: usize = 10;

/// Maximum number of ordering keys.
pub const MAX_ORDER_BY_FIELDS: usize = 10;

/// Maximum number of entries in the `PARAMETERS` clause.
pub const MAX_PARAMETERS: usize = 50;

/// Maximum length of the rendered query, in bytes.
pub const MAX_QUERY_LENGTH: usize = 100_000;

/// Maximum length of a match pattern, in characters.
pub const MAX_PATTERN_LENGTH: usize = 1000;

/// Maximum parenthesis nesting depth in a match pattern.
pub const MAX_PATTERN_DEPTH: usize = 50;

/// Fail with a limit error if `count` exceeds `ceiling`.
pub(crate) fn check_count(what: &str, ceiling: usize, count: usize) -> GaqlResult<()> {
    if count > ceiling {
        return Err(GaqlError::limit(
            format!("at most {ceiling} {what}"),
            format!("{count}"),
        ));
    }
    Ok(())
}

/// Fail with a limit error if a rendered query is too long.
pub(crate) fn check_query_length(bytes: usize) -> GaqlResult<()> {
    if bytes > MAX_QUERY_LENGTH {
        return Err(GaqlError::limit(
            format!("a rendered query of at most {MAX_QUERY_LENGTH} bytes"),
            format!("{bytes} bytes"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_at_ceiling_passes() {
        assert!(check_count("conditions", MAX_CONDITIONS, MAX_CONDITIONS).is_ok());
    }

    #[test]
    fn count_over_ceiling_fails() {
        let err = check_count("conditions", MAX_CONDITIONS, MAX_CONDITIONS + 1).unwrap_err();
        assert!(err.is_limit());
        assert!(err.to_string().contains("at most 100 conditions"));
        assert!(err.to_string().contains("Received: 101"));
    }

    #[test]
    fn query_length_over_ceiling_fails() {
        assert!(check_query_length(MAX_QUERY_LENGTH).is_ok());
        let err = check_query_length(MAX_QUERY_LENGTH + 1).unwrap_err();
        assert!(err.is_limit());
    }
}
