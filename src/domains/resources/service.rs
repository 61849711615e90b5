//! Resource service implementation.
//!
//! The ResourceService owns the composed registry and answers list and read
//! requests. Catalogs are defined in `definitions/` and composed via
//! `registry.rs`; adding a catalog does NOT require modifying this file.

use std::future::Future;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::fetcher::{DocumentFetcher, HttpFetcher};
use super::registry::{ResourceRegistry, compose_all};
use crate::core::config::ResourcesConfig;
use crate::core::error::{Error, Result};

/// Service for listing and reading resources.
pub struct ResourceService {
    registry: ResourceRegistry,
}

impl ResourceService {
    /// Wrap an already composed registry.
    pub fn new(registry: ResourceRegistry) -> Self {
        Self { registry }
    }

    /// Compose every catalog against one HTTP client built from `config`.
    ///
    /// Fails if the client cannot be built or the catalog is misconfigured.
    pub fn from_config(config: &ResourcesConfig) -> Result<Self> {
        info!("Initializing ResourceService");

        let fetcher = HttpFetcher::from_config(config)
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Self::with_fetcher(Arc::new(fetcher), config)
    }

    /// Compose every catalog against the given fetcher.
    pub fn with_fetcher(fetcher: Arc<dyn DocumentFetcher>, config: &ResourcesConfig) -> Result<Self> {
        let registry = compose_all(fetcher, config.retry_policy())?;
        Ok(Self::new(registry))
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.registry
            .entries()
            .iter()
            .map(|entry| entry.to_resource())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> std::result::Result<ReadResourceResult, ResourceError> {
        self.read_resource_until(uri, std::future::pending()).await
    }

    /// Read a resource by URI, giving up as soon as `cancelled` completes.
    ///
    /// Giving up drops the in-flight resolution, so no further fetch attempts
    /// are made on behalf of the abandoned request.
    pub async fn read_resource_until<C>(
        &self,
        uri: &str,
        cancelled: C,
    ) -> std::result::Result<ReadResourceResult, ResourceError>
    where
        C: Future<Output = ()>,
    {
        let entry = self
            .registry
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = tokio::select! {
            result = entry.read() => result?,
            _ = cancelled => {
                info!("Read of {} cancelled by caller", uri);
                return Err(ResourceError::Cancelled(uri.to_string()));
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
