//! Error types for gaql

use thiserror::Error;

/// Result type alias for gaql operations
pub type GaqlResult<T> = Result<T, GaqlError>;

/// Error types for query building
///
/// Every message carries the constraint that was violated and the value
/// that violated it, in the form `Expected: <constraint>, Received:
/// <value>`, so callers can log or surface failures without matching on
/// the variant. The variant itself distinguishes malformed input
/// ([`Validation`](Self::Validation), [`Build`](Self::Build)) from
/// security rejections ([`Security`](Self::Security)) and ceiling
/// violations ([`Limit`](Self::Limit)).
#[derive(Debug, Error)]
pub enum GaqlError {
    /// Malformed input: bad identifier, operator, date, direction,
    /// value form, or an empty required collection
    #[error("Expected: {expected}, Received: {received}")]
    Validation { expected: String, received: String },

    /// Structurally incomplete query at render time (missing clause)
    #[error("Expected: {expected}, Received: {received}")]
    Build { expected: String, received: String },

    /// Input rejected on safety grounds (unsafe match pattern)
    #[error("Expected: {expected}, Received: {received}")]
    Security { expected: String, received: String },

    /// A count or size ceiling was exceeded
    #[error("Expected: {expected}, Received: {received}")]
    Limit { expected: String, received: String },
}

impl GaqlError {
    /// Create a validation error
    pub fn validation(expected: impl Into<String>, received: impl Into<String>) -> Self {
        Self::Validation {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create a build error
    pub fn build(expected: impl Into<String>, received: impl Into<String>) -> Self {
        Self::Build {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create a security error
    pub fn security(expected: impl Into<String>, received: impl Into<String>) -> Self {
        Self::Security {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create a limit error
    pub fn limit(expected: impl Into<String>, received: impl Into<String>) -> Self {
        Self::Limit {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a build error
    pub fn is_build(&self) -> bool {
        matches!(self, Self::Build { .. })
    }

    /// Check if this is a security error
    pub fn is_security(&self) -> bool {
        matches!(self, Self::Security { .. })
    }

    /// Check if this is a limit error
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::Limit { .. })
    }
}
