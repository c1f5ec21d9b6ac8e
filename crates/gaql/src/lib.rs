//! # gaql
//!
//! A validating, injection-safe query builder for the Google Ads Query
//! Language.
//!
//! ## Features
//!
//! - **Fluent accumulation**: chain `select` / `from` / `where_*` /
//!   `group_by` / `order_by` / `limit` / `parameter` calls in any order;
//!   rendering always emits clauses in the language's fixed order
//! - **Validation at the boundary**: field and resource names, operators,
//!   dates, and match patterns are checked on every call, before any state
//!   changes
//! - **Injection-proof literals**: string values are quoted with `'`
//!   doubled, the language's only escape mechanism, and names never carry
//!   anything outside the identifier grammar
//! - **Pattern screening**: `LIKE` / `REGEXP_MATCH` patterns go through a
//!   catastrophic-backtracking screen before they are accepted
//! - **Hard ceilings**: field, condition, list, key, and parameter counts
//!   and total query length are capped with clear errors
//! - **Branchable failures**: every error is a [`GaqlError`] with
//!   `Expected: ..., Received: ...` messaging and `is_*` predicates
//!
//! ## Building a query
//!
//! ```ignore
//! use gaql::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.select(&["campaign.id", "campaign.name", "metrics.clicks"])?
//!     .from("campaign")?
//!     .where_eq("campaign.status", "ENABLED")?
//!     .where_during("segments.date", "LAST_30_DAYS")?
//!     .order_by_desc("metrics.clicks")?
//!     .limit(50)?
//!     .parameter("include_drafts", true)?;
//!
//! let query = qb.build()?;
//! // SELECT campaign.id, campaign.name, metrics.clicks FROM campaign
//! //   WHERE campaign.status = 'ENABLED' AND segments.date DURING LAST_30_DAYS
//! //   ORDER BY metrics.clicks DESC LIMIT 50 PARAMETERS include_drafts = true
//! # Ok::<(), gaql::GaqlError>(())
//! ```
//!
//! Conditions can also be built standalone and reused across builders:
//!
//! ```ignore
//! use gaql::{Condition, QueryBuilder};
//!
//! let enabled = Condition::eq("campaign.status", "ENABLED")?;
//! let mut qb = QueryBuilder::new();
//! qb.select(&["campaign.id"])?
//!     .from("campaign")?
//!     .where_condition(enabled.clone())?;
//! # Ok::<(), gaql::GaqlError>(())
//! ```

pub mod builder;
pub mod condition;
pub mod date;
pub mod error;
pub mod ident;
pub mod limits;
pub mod pattern;
pub mod value;

pub use builder::QueryBuilder;
pub use condition::{CmpOp, Condition, SortOrder};
pub use date::DATE_RANGE_TOKENS;
pub use error::{GaqlError, GaqlResult};
pub use limits::{
    MAX_CONDITIONS, MAX_GROUP_BY_FIELDS, MAX_LIST_VALUES, MAX_ORDER_BY_FIELDS, MAX_PARAMETERS,
    MAX_PATTERN_DEPTH, MAX_PATTERN_LENGTH, MAX_QUERY_LENGTH, MAX_SELECT_FIELDS,
};
pub use pattern::is_pattern_safe;
pub use value::{ParameterValue, Value, escape_pattern};
