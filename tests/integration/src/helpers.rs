//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pickup_api::{create_app, create_app_state, AppState};
use pickup_common::AppConfig;
use pickup_service::memory::InMemoryBackend;
use pickup_service::ServiceContext;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose repositories are the given in-memory backend
    pub async fn start(backend: &Arc<InMemoryBackend>) -> Result<Self> {
        let ctx = ServiceContext::builder()
            .community_repo(backend.clone())
            .game_repo(backend.clone())
            .health_probe(backend.clone())
            .build()?;
        Self::start_with_state(AppState::new(ctx, test_config("http://localhost:54321")?)).await
    }

    /// Start a server wired from configuration, as the binary does
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    /// Start a server with a prepared state
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Send a request with an arbitrary method and no body
    pub async fn request(&self, method: Method, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.request(method, &url).send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

/// Configuration pointing the REST backend at `backend_url`
pub fn test_config(backend_url: &str) -> Result<AppConfig> {
    let backend_url = backend_url.to_string();
    let config = AppConfig::from_lookup(|key| match key {
        "SUPABASE_URL" => Some(backend_url.clone()),
        "SUPABASE_SERVICE_ROLE_KEY" => Some(SERVICE_KEY.to_string()),
        "BACKEND_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Service key used by [`test_config`]
pub const SERVICE_KEY: &str = "test-service-role-key";

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert the two CORS headers every trigger response carries
pub fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
}
