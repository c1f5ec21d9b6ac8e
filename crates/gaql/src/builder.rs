//! Query builder: clause accumulation and rendering.
//!
//! [`QueryBuilder`] collects validated clauses through fluent calls and
//! renders them in the language's fixed order: `SELECT`, `FROM`,
//! `WHERE`, `GROUP BY`, `ORDER BY`, `LIMIT`, `PARAMETERS`. Call order
//! never changes the output. Every mutating call validates its inputs
//! and checks the relevant ceiling before touching state, so a call
//! that returns an error leaves the builder exactly as it was.
//!
//! # Example
//! ```ignore
//! use gaql::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.select(&["campaign.id", "campaign.name"])?
//!     .from("campaign")?
//!     .where_eq("campaign.status", "ENABLED")?
//!     .where_during("segments.date", "LAST_30_DAYS")?
//!     .order_by_desc("campaign.id")?
//!     .limit(50)?;
//!
//! let query = qb.build()?;
//! # Ok::<(), gaql::GaqlError>(())
//! ```

use std::str::FromStr;

use crate::condition::{CmpOp, Condition, SortOrder};
use crate::error::{GaqlError, GaqlResult};
use crate::ident;
use crate::limits;
use crate::value::{ParameterValue, Value};

/// A fluent, validating query builder.
///
/// Selection, filtering, grouping, and ordering accumulate across
/// calls; the source and the row cap keep the last value written;
/// [`parameters`](Self::parameters) replaces the whole parameter set
/// while [`parameter`](Self::parameter) upserts one entry. The builder
/// stays usable after [`build`](Self::build): render again, or keep
/// mutating and re-render.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    select_fields: Vec<String>,
    resource: Option<String>,
    conditions: Vec<Condition>,
    group_fields: Vec<String>,
    order_keys: Vec<(String, SortOrder)>,
    row_limit: Option<u64>,
    parameters: Vec<(String, ParameterValue)>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== SELECT / FROM ====================

    /// Append fields to the SELECT clause.
    ///
    /// Fields may be plain names (`campaign.id`) or aggregate calls
    /// (`SUM(metrics.clicks)`). The call must carry at least one field
    /// and is atomic: if any field is invalid, none are added.
    pub fn select(&mut self, fields: &[&str]) -> GaqlResult<&mut Self> {
        if fields.is_empty() {
            return Err(GaqlError::validation(
                "at least one field to select",
                "an empty field list",
            ));
        }
        for field in fields {
            ident::validate_field_name(field)?;
        }
        limits::check_count(
            "select fields",
            limits::MAX_SELECT_FIELDS,
            self.select_fields.len() + fields.len(),
        )?;
        self.select_fields
            .extend(fields.iter().map(|f| f.to_string()));
        Ok(self)
    }

    /// Append one field to the SELECT clause.
    pub fn select_field(&mut self, field: &str) -> GaqlResult<&mut Self> {
        self.select(&[field])
    }

    /// Set the FROM resource. Calling again replaces the previous one.
    pub fn from(&mut self, resource: &str) -> GaqlResult<&mut Self> {
        ident::validate_resource_name(resource)?;
        self.resource = Some(resource.to_string());
        Ok(self)
    }

    // ==================== WHERE conditions ====================

    /// Append a pre-built condition.
    pub fn where_condition(&mut self, condition: Condition) -> GaqlResult<&mut Self> {
        self.push_condition(condition)
    }

    /// Add WHERE: field <op> value
    pub fn where_op(
        &mut self,
        field: &str,
        op: CmpOp,
        value: impl Into<Value>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::cmp(field, op, value)?;
        self.push_condition(condition)
    }

    /// Add WHERE with the operator given as its query-string spelling
    /// (`"="`, `"!="`, `">"`, `">="`, `"<"`, `"<="`).
    pub fn where_cmp(
        &mut self,
        field: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> GaqlResult<&mut Self> {
        let op = CmpOp::from_str(op)?;
        self.where_op(field, op, value)
    }

    /// Add WHERE: field = value
    pub fn where_eq(&mut self, field: &str, value: impl Into<Value>) -> GaqlResult<&mut Self> {
        self.where_op(field, CmpOp::Eq, value)
    }

    /// Add WHERE: field != value
    pub fn where_ne(&mut self, field: &str, value: impl Into<Value>) -> GaqlResult<&mut Self> {
        self.where_op(field, CmpOp::Ne, value)
    }

    /// Add WHERE: field > value
    pub fn where_gt(&mut self, field: &str, value: impl Into<Value>) -> GaqlResult<&mut Self> {
        self.where_op(field, CmpOp::Gt, value)
    }

    /// Add WHERE: field >= value
    pub fn where_gte(&mut self, field: &str, value: impl Into<Value>) -> GaqlResult<&mut Self> {
        self.where_op(field, CmpOp::Gte, value)
    }

    /// Add WHERE: field < value
    pub fn where_lt(&mut self, field: &str, value: impl Into<Value>) -> GaqlResult<&mut Self> {
        self.where_op(field, CmpOp::Lt, value)
    }

    /// Add WHERE: field <= value
    pub fn where_lte(&mut self, field: &str, value: impl Into<Value>) -> GaqlResult<&mut Self> {
        self.where_op(field, CmpOp::Lte, value)
    }

    /// Add WHERE: field IN (values...)
    pub fn where_in<T: Into<Value>>(
        &mut self,
        field: &str,
        values: Vec<T>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::in_list(field, values)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field NOT IN (values...)
    pub fn where_not_in<T: Into<Value>>(
        &mut self,
        field: &str,
        values: Vec<T>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::not_in(field, values)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field LIKE 'pattern'
    pub fn where_like(&mut self, field: &str, pattern: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::like(field, pattern)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field NOT LIKE 'pattern'
    pub fn where_not_like(&mut self, field: &str, pattern: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::not_like(field, pattern)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field REGEXP_MATCH 'pattern'
    pub fn where_regexp_match(&mut self, field: &str, pattern: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::regexp_match(field, pattern)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field NOT REGEXP_MATCH 'pattern'
    pub fn where_not_regexp_match(&mut self, field: &str, pattern: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::not_regexp_match(field, pattern)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field IS NULL
    pub fn where_null(&mut self, field: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::is_null(field)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field IS NOT NULL
    pub fn where_not_null(&mut self, field: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::is_not_null(field)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field BETWEEN low AND high
    pub fn where_between(
        &mut self,
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::between(field, low, high)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field CONTAINS ALL (values...)
    pub fn where_contains_all<T: Into<Value>>(
        &mut self,
        field: &str,
        values: Vec<T>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::contains_all(field, values)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field CONTAINS ANY (values...)
    pub fn where_contains_any<T: Into<Value>>(
        &mut self,
        field: &str,
        values: Vec<T>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::contains_any(field, values)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field CONTAINS NONE (values...)
    pub fn where_contains_none<T: Into<Value>>(
        &mut self,
        field: &str,
        values: Vec<T>,
    ) -> GaqlResult<&mut Self> {
        let condition = Condition::contains_none(field, values)?;
        self.push_condition(condition)
    }

    /// Add WHERE: field DURING <range token or 'YYYY-MM-DD'>
    pub fn where_during(&mut self, field: &str, value: &str) -> GaqlResult<&mut Self> {
        let condition = Condition::during(field, value)?;
        self.push_condition(condition)
    }

    // ==================== Grouping & Ordering ====================

    /// Append fields to the GROUP BY clause (plain names only).
    pub fn group_by(&mut self, fields: &[&str]) -> GaqlResult<&mut Self> {
        if fields.is_empty() {
            return Err(GaqlError::validation(
                "at least one field to group by",
                "an empty field list",
            ));
        }
        for field in fields {
            if !ident::is_valid_identifier(field) {
                return Err(GaqlError::validation(
                    "grouping field of dot-separated segments matching [A-Za-z_][A-Za-z0-9_]*",
                    format!("'{field}'"),
                ));
            }
        }
        limits::check_count(
            "group by fields",
            limits::MAX_GROUP_BY_FIELDS,
            self.group_fields.len() + fields.len(),
        )?;
        self.group_fields
            .extend(fields.iter().map(|f| f.to_string()));
        Ok(self)
    }

    /// Append an ascending ORDER BY key.
    pub fn order_by(&mut self, field: &str) -> GaqlResult<&mut Self> {
        self.order_by_with(field, SortOrder::Asc)
    }

    /// Append an ORDER BY key: field ASC
    pub fn order_by_asc(&mut self, field: &str) -> GaqlResult<&mut Self> {
        self.order_by_with(field, SortOrder::Asc)
    }

    /// Append an ORDER BY key: field DESC
    pub fn order_by_desc(&mut self, field: &str) -> GaqlResult<&mut Self> {
        self.order_by_with(field, SortOrder::Desc)
    }

    /// Append an ORDER BY key with an explicit direction.
    pub fn order_by_with(&mut self, field: &str, order: SortOrder) -> GaqlResult<&mut Self> {
        ident::validate_field_name(field)?;
        limits::check_count(
            "order by fields",
            limits::MAX_ORDER_BY_FIELDS,
            self.order_keys.len() + 1,
        )?;
        self.order_keys.push((field.to_string(), order));
        Ok(self)
    }

    // ==================== LIMIT & PARAMETERS ====================

    /// Set the row cap. Calling again replaces the previous one.
    pub fn limit(&mut self, n: u64) -> GaqlResult<&mut Self> {
        if n == 0 {
            return Err(GaqlError::validation("a row cap of at least 1", "0"));
        }
        self.row_limit = Some(n);
        Ok(self)
    }

    /// Upsert one entry in the PARAMETERS clause.
    ///
    /// A new name appends in call order; an existing name keeps its
    /// position and takes the new value.
    pub fn parameter(
        &mut self,
        name: &str,
        value: impl Into<ParameterValue>,
    ) -> GaqlResult<&mut Self> {
        ident::validate_parameter_name(name)?;
        let value = value.into();
        value.validate()?;

        if let Some(entry) = self.parameters.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value;
            return Ok(self);
        }
        limits::check_count(
            "parameters",
            limits::MAX_PARAMETERS,
            self.parameters.len() + 1,
        )?;
        self.parameters.push((name.to_string(), value));
        Ok(self)
    }

    /// Replace the whole PARAMETERS clause.
    ///
    /// Duplicate names within `entries` collapse to the last value
    /// given. The call is atomic: on any invalid entry the previous
    /// parameter set is untouched.
    pub fn parameters(&mut self, entries: &[(&str, ParameterValue)]) -> GaqlResult<&mut Self> {
        let mut replaced: Vec<(String, ParameterValue)> = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            ident::validate_parameter_name(name)?;
            value.validate()?;
            match replaced.iter_mut().find(|(k, _)| k == name) {
                Some(entry) => entry.1 = value.clone(),
                None => replaced.push((name.to_string(), value.clone())),
            }
        }
        limits::check_count("parameters", limits::MAX_PARAMETERS, replaced.len())?;
        self.parameters = replaced;
        Ok(self)
    }

    // ==================== Build ====================

    /// Render the accumulated state into a query string.
    ///
    /// Pure: the builder is unchanged and can be rendered again or
    /// mutated further. Fails if no field was selected, no resource was
    /// set, or the rendered string exceeds the length ceiling.
    pub fn build(&self) -> GaqlResult<String> {
        if self.select_fields.is_empty() {
            return Err(GaqlError::build(
                "at least one selected field before rendering",
                "an empty SELECT clause",
            ));
        }
        let Some(resource) = &self.resource else {
            return Err(GaqlError::build(
                "a FROM resource before rendering",
                "no FROM clause",
            ));
        };

        let mut query = String::with_capacity(self.render_capacity(resource));

        query.push_str("SELECT ");
        for (i, field) in self.select_fields.iter().enumerate() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push_str(field);
        }

        query.push_str(" FROM ");
        query.push_str(resource);

        // WHERE
        if !self.conditions.is_empty() {
            query.push_str(" WHERE ");
            for (i, condition) in self.conditions.iter().enumerate() {
                if i > 0 {
                    query.push_str(" AND ");
                }
                query.push_str(condition.as_str());
            }
        }

        // GROUP BY
        if !self.group_fields.is_empty() {
            query.push_str(" GROUP BY ");
            for (i, field) in self.group_fields.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push_str(field);
            }
        }

        // ORDER BY
        if !self.order_keys.is_empty() {
            query.push_str(" ORDER BY ");
            for (i, (field, order)) in self.order_keys.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push_str(field);
                query.push(' ');
                query.push_str(order.as_str());
            }
        }

        // LIMIT
        if let Some(n) = self.row_limit {
            query.push_str(" LIMIT ");
            query.push_str(&n.to_string());
        }

        // PARAMETERS
        if !self.parameters.is_empty() {
            query.push_str(" PARAMETERS ");
            for (i, (name, value)) in self.parameters.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push_str(name);
                query.push_str(" = ");
                query.push_str(&value.to_string());
            }
        }

        limits::check_query_length(query.len())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "gaql.query",
            resource = %resource,
            select_count = self.select_fields.len(),
            condition_count = self.conditions.len(),
            parameter_count = self.parameters.len(),
            length = query.len(),
        );

        Ok(query)
    }

    fn push_condition(&mut self, condition: Condition) -> GaqlResult<&mut Self> {
        limits::check_count(
            "conditions",
            limits::MAX_CONDITIONS,
            self.conditions.len() + 1,
        )?;
        self.conditions.push(condition);
        Ok(self)
    }

    // Pre-size to avoid repeated reallocations while rendering.
    fn render_capacity(&self, resource: &str) -> usize {
        let mut cap = 7 + 6 + resource.len(); // "SELECT " + " FROM "
        for field in &self.select_fields {
            cap += field.len() + 2;
        }
        for condition in &self.conditions {
            cap += condition.as_str().len() + 5; // " AND " / " WHERE "
        }
        for field in &self.group_fields {
            cap += field.len() + 2;
        }
        if !self.group_fields.is_empty() {
            cap += 10;
        }
        for (field, _) in &self.order_keys {
            cap += field.len() + 7;
        }
        if !self.order_keys.is_empty() {
            cap += 10;
        }
        if self.row_limit.is_some() {
            cap += 27;
        }
        for (name, _) in &self.parameters {
            cap += name.len() + 28;
        }
        if !self.parameters.is_empty() {
            cap += 12;
        }
        cap
    }
}
