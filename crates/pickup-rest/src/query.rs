//! Table query builder
//!
//! Filters render to PostgREST's `column=operator.value` query parameters.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

use crate::client::RestClient;
use crate::error::RestError;

/// A single row filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`
    Eq(String, String),
    /// `column IS NOT NULL`
    NotNull(String),
    /// `column IN (values…)`
    In(String, Vec<String>),
}

impl Filter {
    /// Render as a `(key, value)` query pair
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Self::Eq(column, value) => (column.clone(), format!("eq.{value}")),
            Self::NotNull(column) => (column.clone(), "not.is.null".to_string()),
            Self::In(column, values) => {
                let list = values
                    .iter()
                    .map(|v| quote_list_value(v))
                    .collect::<Vec<_>>()
                    .join(",");
                (column.clone(), format!("in.({list})"))
            }
        }
    }
}

/// Quote a list element when it contains characters PostgREST reserves
fn quote_list_value(value: &str) -> String {
    const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\', ' '];
    if value.contains(RESERVED) {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Builder for a read or update against one table
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a RestClient,
    table: String,
    select: Option<String>,
    filters: Vec<Filter>,
    limit: Option<usize>,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a RestClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Project the named columns (comma separated)
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push(Filter::Eq(column.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn not_null(mut self, column: &str) -> Self {
        self.filters.push(Filter::NotNull(column.to_string()));
        self
    }

    #[must_use]
    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let values = values.into_iter().map(|v| v.to_string()).collect();
        self.filters.push(Filter::In(column.to_string(), values));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters in the order they were added, `select` first
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 2);
        if let Some(select) = &self.select {
            pairs.push(("select".to_string(), select.clone()));
        }
        pairs.extend(self.filters.iter().map(Filter::to_query_pair));
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    /// `GET` the matching rows
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RestError> {
        let url = self.client.table_url(&self.table);
        let pairs = self.query_pairs();
        debug!(table = %self.table, ?pairs, "REST select");

        let response = self.client.http().get(url).query(&pairs).send().await?;
        read_rows(response).await
    }

    /// `PATCH` the matching rows with `body` and return the changed rows
    ///
    /// Uses `Prefer: return=representation`, so the `select` projection
    /// controls which columns come back.
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.client.table_url(&self.table);
        let pairs = self.query_pairs();
        debug!(table = %self.table, ?pairs, "REST update");

        let response = self
            .client
            .http()
            .patch(url)
            .query(&pairs)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        read_rows(response).await
    }
}

async fn read_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>, RestError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(RestError::from_response(
            status.as_u16(),
            &String::from_utf8_lossy(&body),
        ));
    }

    Ok(serde_json::from_slice(&body)?)
}
