// 📡 Entity Fetcher
// One GET per page activation. Every outcome collapses into a terminal state:
//
//   Loading ──► Ready(items)   HTTP 200 + JSON array (possibly empty)
//          └──► Failed         network error, non-200 status, malformed body
//
// Failures are logged and never returned to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Why a fetch failed. Only logged; the view sees a single `Failed` state.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        RawResponse {
            status: 200,
            body: body.into(),
        }
    }
}

/// The network seam: HTTP in production, canned responses in tests.
pub trait Transport: Send + Sync {
    fn get(&self, endpoint: &str) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}

/// `reqwest`-backed transport rooted at the API base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpTransport {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str) -> Result<RawResponse, FetchError> {
        let url = self.url_for(endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// FETCH STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "items", rename_all = "lowercase")]
pub enum FetchState<E> {
    Loading,
    Ready(Vec<E>),
    Failed,
}

impl<E> FetchState<E> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    /// Fetched items; empty while loading or after a failure.
    pub fn items(&self) -> &[E] {
        match self {
            FetchState::Ready(items) => items,
            FetchState::Loading | FetchState::Failed => &[],
        }
    }
}

// ============================================================================
// FETCHER
// ============================================================================

#[derive(Debug, Clone)]
pub struct EntityFetcher<T> {
    transport: T,
}

impl<T: Transport> EntityFetcher<T> {
    pub fn new(transport: T) -> Self {
        EntityFetcher { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a collection and settle it into `Ready` or `Failed`.
    pub async fn fetch_collection<E: DeserializeOwned>(&self, endpoint: &str) -> FetchState<E> {
        match self.try_fetch(endpoint).await {
            Ok(items) => {
                tracing::info!(endpoint, count = items.len(), "collection loaded");
                FetchState::Ready(items)
            }
            Err(e) => {
                tracing::error!(endpoint, error = %e, "failed to load collection");
                FetchState::Failed
            }
        }
    }

    async fn try_fetch<E: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<E>, FetchError> {
        let response = self.transport.get(endpoint).await?;

        if response.status != 200 {
            return Err(FetchError::Status(response.status));
        }

        Ok(serde_json::from_str::<Vec<E>>(&response.body)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
