//! PostgREST HTTP client

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;
use std::time::Duration;

use crate::error::RestError;
use crate::query::TableQuery;

/// Connection settings for the managed backend
#[derive(Clone)]
pub struct RestClientConfig {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub base_url: String,
    /// Service-role key
    pub service_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            service_key: service_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for RestClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClientConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Shared client for the backend's REST surface
///
/// Cheap to clone; the underlying connection pool is reference counted.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    rest_url: String,
}

impl RestClient {
    /// Build a client that authenticates every request with the service key
    ///
    /// # Errors
    /// Returns `RestError::InvalidConfig` if the key cannot be sent as a
    /// header, or `RestError::Http` if the TLS backend fails to initialize.
    pub fn new(config: &RestClientConfig) -> Result<Self, RestError> {
        let invalid_key = || RestError::InvalidConfig("service key is not a valid header value".into());

        let mut apikey = HeaderValue::from_str(&config.service_key).map_err(|_| invalid_key())?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_key))
            .map_err(|_| invalid_key())?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.base_url.trim_end_matches('/')),
        })
    }

    /// Start a query against a table
    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery::new(self, name)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn table_url(&self, name: &str) -> String {
        format!("{}/{}", self.rest_url, name)
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("rest_url", &self.rest_url)
            .finish_non_exhaustive()
    }
}
