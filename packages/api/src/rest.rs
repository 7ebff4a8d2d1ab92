//! REST implementation of the generic table interface.
//!
//! [`RestStore`] speaks the hosted service's PostgREST dialect: filters and
//! ordering travel as query-string parameters (`column=eq.value`,
//! `title=ilike.*term*`, `id=in.(1,2)`, `or=(...)`, `order=column.desc`),
//! writes ask for `return=representation` so the authoritative row comes
//! back, and every request carries the public API key plus a bearer token —
//! the session's when one exists, the key itself otherwise.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use store::{Filter, Order, Query, Row, StoreError, TableStore};

use crate::config::ServiceConfig;

/// `store::TableStore` over the Remote Data Service's REST endpoint.
#[derive(Clone, Debug)]
pub struct RestStore {
    client: Client,
    service_url: String,
    service_key: String,
    bearer: String,
}

impl RestStore {
    /// A store acting as the anonymous role.
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_token(config, None)
    }

    /// A store acting as the signed-in user when a session token is given,
    /// as the anonymous role otherwise.
    pub fn with_token(config: &ServiceConfig, access_token: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            service_url: config.service_url.clone(),
            service_key: config.service_key.clone(),
            bearer: access_token.unwrap_or(&config.service_key).to_string(),
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/rest/v1/{}", self.service_url, table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.bearer)
    }
}

impl TableStore for RestStore {
    async fn select(&self, table: &str, query: Query) -> Result<Vec<Row>, StoreError> {
        let mut params = vec![("select".to_string(), select_param(&query))];
        params.extend(filter_params(&query));

        let response = self
            .request(Method::GET, table)
            .query(&params)
            .send()
            .await
            .map_err(transport)?;
        let response = check(response, table).await?;

        response.json::<Vec<Row>>().await.map_err(transport)
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Row, StoreError> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(transport)?;
        let response = check(response, table).await?;

        single_row(response, table).await
    }

    async fn update(&self, table: &str, patch: Row, query: Query) -> Result<Row, StoreError> {
        let response = self
            .request(Method::PATCH, table)
            .header("Prefer", "return=representation")
            .query(&filter_params(&query))
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        let response = check(response, table).await?;

        single_row(response, table).await
    }

    async fn delete(&self, table: &str, query: Query) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, table)
            .query(&filter_params(&query))
            .send()
            .await
            .map_err(transport)?;
        check(response, table).await?;
        Ok(())
    }
}

/// The service answers writes with an array of affected rows; callers of
/// insert/update expect exactly one.
async fn single_row(response: Response, table: &str) -> Result<Row, StoreError> {
    let rows: Vec<Row> = response.json().await.map_err(transport)?;
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::NotFound(table.to_string()))
}

async fn check(response: Response, table: &str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = service_message(&body).unwrap_or(body);
    tracing::error!("request against `{table}` failed: {status} {message}");
    Err(StoreError::Service(format!("{status}: {message}")))
}

fn transport(error: reqwest::Error) -> StoreError {
    tracing::error!("transport error: {error}");
    StoreError::Service(error.to_string())
}

/// Error payloads carry their human-readable text under `message`.
fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn select_param(query: &Query) -> String {
    if query.columns.is_empty() {
        "*".to_string()
    } else {
        query.columns.join(",")
    }
}

fn filter_params(query: &Query) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = query.filters.iter().map(filter_param).collect();
    if let Some(ref order) = query.order {
        params.push(("order".to_string(), order_param(order)));
    }
    params
}

fn filter_param(filter: &Filter) -> (String, String) {
    match filter {
        Filter::Eq(column, value) => (column.clone(), format!("eq.{}", literal(value))),
        Filter::Ilike(column, term) => (column.clone(), format!("ilike.*{term}*")),
        Filter::In(column, values) => {
            let list: Vec<String> = values.iter().map(literal).collect();
            (column.clone(), format!("in.({})", list.join(",")))
        }
        Filter::Or(filters) => {
            let terms: Vec<String> = filters.iter().map(or_term).collect();
            ("or".to_string(), format!("({})", terms.join(",")))
        }
    }
}

/// Nested form used inside `or=(...)` groups: `column.op.value`.
fn or_term(filter: &Filter) -> String {
    let (column, rhs) = filter_param(filter);
    format!("{column}.{rhs}")
}

fn order_param(order: &Order) -> String {
    let direction = if order.descending { "desc" } else { "asc" };
    format!("{}.{}", order.column, direction)
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
