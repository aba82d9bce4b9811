//! Movie catalog client.
//!
//! [`MovieSearchApi`] is the seam the session talks to. [`HttpMovieApi`] is
//! the production implementation on top of reqwest, which works on both
//! targets:
//! - Native: hyper with rustls
//! - WASM: the browser's fetch() API
//!
//! The client only classifies transport outcomes. Interpreting the body
//! (including the lenient `description` rule) is left to
//! [`crate::movie::extract_movies`].

use crate::config::SearchConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A backend that can run one title search.
///
/// `?Send` because the browser fetch future is not `Send`.
#[async_trait(?Send)]
pub trait MovieSearchApi {
    /// Issues a single GET for `query` and returns the decoded JSON body.
    ///
    /// # Errors
    /// - `ApiError::Transport` - no response (network, timeout, CORS)
    /// - `ApiError::Status` - non-2xx; carries the body's `message` if any
    /// - `ApiError::Decode` - body could not be read
    ///
    /// A 2xx body that is not JSON comes back as `Value::Null`, which
    /// [`crate::movie::extract_movies`] reads as zero results.
    async fn search(&self, query: &str) -> Result<Value, ApiError>;
}

/// reqwest-backed catalog client.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: reqwest::Client,
    endpoint: String,
    query_param: String,
}

impl HttpMovieApi {
    /// Builds a client for the configured endpoint.
    pub fn new(config: &SearchConfig) -> Result<Self, ApiError> {
        let endpoint = url::Url::parse(&config.endpoint).map_err(|e| {
            ApiError::Transport(format!("Invalid endpoint {}: {}", config.endpoint, e))
        })?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .user_agent(crate::config::USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;

        // Browsers own the user agent and request timeouts.
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            query_param: config.query_param.clone(),
        })
    }

    /// Full request URL for `query`, as it would be sent.
    pub fn request_url(&self, query: &str) -> Result<url::Url, ApiError> {
        let mut url = url::Url::parse(&self.endpoint)
            .map_err(|e| ApiError::Transport(format!("Invalid endpoint: {}", e)))?;
        url.query_pairs_mut().append_pair(&self.query_param, query);
        Ok(url)
    }
}

#[async_trait(?Send)]
impl MovieSearchApi for HttpMovieApi {
    async fn search(&self, query: &str) -> Result<Value, ApiError> {
        let url = self.request_url(query)?;
        debug!("Catalog search: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        // A 2xx body that is not JSON has no results in it.
        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            debug!("Non-JSON catalog body ({} bytes): {}", bytes.len(), e);
            Value::Null
        }))
    }
}

/// `message` field of a JSON error body, if the body is JSON and has one.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
