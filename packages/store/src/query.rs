//! # Generic table-query interface
//!
//! The Remote Data Service is an opaque collaborator: every data operation in
//! the app is a select/insert/update/delete against one of its tables. This
//! module defines that boundary as the [`TableStore`] trait plus the filter
//! and ordering values that travel with a query. Implementations live
//! elsewhere — [`crate::MemoryStore`] evaluates queries in process (tests and
//! native fallback), and the `api` crate speaks the hosted service's REST
//! dialect.
//!
//! Rows cross the boundary as JSON objects; the typed layer on top is
//! [`crate::DataService`].

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

/// A single row as the service returns it.
pub type Row = serde_json::Map<String, Value>;

/// Errors crossing the table-store boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transport failure or an error response from the service.
    #[error("service error: {0}")]
    Service(String),
    /// Exactly one row was expected and none came back.
    #[error("no matching row in `{0}`")]
    NotFound(String),
}

/// A row predicate, combinable with AND semantics at the query level.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Column equals value.
    Eq(String, Value),
    /// Case-insensitive substring match on a text column.
    Ilike(String, String),
    /// Column value is one of the given values.
    In(String, Vec<Value>),
    /// Any of the inner filters matches.
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self::Eq(column.to_string(), value.into())
    }

    pub fn ilike(column: &str, term: &str) -> Self {
        Self::Ilike(column.to_string(), term.to_string())
    }

    pub fn is_in(column: &str, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::In(
            column.to_string(),
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn any(filters: Vec<Filter>) -> Self {
        Self::Or(filters)
    }

    /// Reference semantics of the predicate, used by the in-memory backend.
    /// A missing column never matches.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Filter::Eq(column, value) => row.get(column) == Some(value),
            Filter::Ilike(column, term) => row
                .get(column)
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_lowercase().contains(&term.to_lowercase())),
            Filter::In(column, values) => row
                .get(column)
                .is_some_and(|value| values.contains(value)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(row)),
        }
    }
}

/// Result ordering on a single column.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

impl Order {
    pub fn desc(column: &str) -> Self {
        Self { column: column.to_string(), descending: true }
    }

    pub fn asc(column: &str) -> Self {
        Self { column: column.to_string(), descending: false }
    }
}

/// Parameters of a select/update/delete: column projection, conjunctive
/// filters, optional ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the result down to the named columns. All columns when unset.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Whether a row satisfies every filter of this query.
    pub fn matches(&self, row: &Row) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }
}

/// Async interface to the Remote Data Service's row store.
///
/// `insert` and `update` return the authoritative row as the service stored
/// it, so callers can merge confirmed state instead of trusting their own
/// submitted values. `delete` is idempotent: deleting zero rows is `Ok`.
pub trait TableStore {
    fn select(
        &self,
        table: &str,
        query: Query,
    ) -> impl Future<Output = Result<Vec<Row>, StoreError>>;

    fn insert(
        &self,
        table: &str,
        row: Row,
    ) -> impl Future<Output = Result<Row, StoreError>>;

    fn update(
        &self,
        table: &str,
        patch: Row,
        query: Query,
    ) -> impl Future<Output = Result<Row, StoreError>>;

    fn delete(
        &self,
        table: &str,
        query: Query,
    ) -> impl Future<Output = Result<(), StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_eq_filter() {
        let r = row(json!({"user_id": "u1", "course_id": 7}));

        assert!(Filter::eq("user_id", "u1").matches(&r));
        assert!(Filter::eq("course_id", 7).matches(&r));
        assert!(!Filter::eq("user_id", "u2").matches(&r));
        assert!(!Filter::eq("missing", "u1").matches(&r));
    }

    #[test]
    fn test_ilike_is_case_insensitive_substring() {
        let r = row(json!({"title": "Intro to Go"}));

        assert!(Filter::ilike("title", "go").matches(&r));
        assert!(Filter::ilike("title", "INTRO").matches(&r));
        assert!(!Filter::ilike("title", "rust").matches(&r));
    }

    #[test]
    fn test_ilike_ignores_non_text_columns() {
        let r = row(json!({"price": 49.99}));
        assert!(!Filter::ilike("price", "49").matches(&r));
    }

    #[test]
    fn test_in_filter() {
        let r = row(json!({"id": 7}));

        assert!(Filter::is_in("id", [5, 7, 9]).matches(&r));
        assert!(!Filter::is_in("id", [1, 2]).matches(&r));
        assert!(!Filter::is_in("id", Vec::<i64>::new()).matches(&r));
    }

    #[test]
    fn test_or_filter() {
        let r = row(json!({"title": "Advanced Rust", "description": "ownership"}));
        let filter = Filter::any(vec![
            Filter::ilike("title", "go"),
            Filter::ilike("description", "owner"),
        ]);

        assert!(filter.matches(&r));
    }

    #[test]
    fn test_query_filters_are_conjunctive() {
        let r = row(json!({"user_id": "u1", "course_id": 7}));
        let query = Query::new()
            .filter(Filter::eq("user_id", "u1"))
            .filter(Filter::eq("course_id", 8));

        assert!(!query.matches(&r));
    }
}
