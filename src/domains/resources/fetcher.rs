//! Network client capability used by remote resources.
//!
//! One fetcher instance is shared read-only by every remote resource of a
//! composed registry. Tests swap in their own implementations.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::FetchError;
use crate::core::config::ResourcesConfig;

/// Issues a GET and returns the response body as text.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch `url` once. Non-success statuses are errors.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// `DocumentFetcher` backed by a single `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Wrap an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the client from the resources configuration.
    pub fn from_config(config: &ResourcesConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
