//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the resource service.
//!
//! The resource registry is composed once, when the server is created, and
//! shared by every connection. A misconfigured catalog makes `McpServer::new`
//! fail so the process never starts with resources silently missing.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::resources::{ResourceError, ResourceService};

const INSTRUCTIONS: &str = "Documentation server for the Effect ecosystem. \
    Read `effect://guide/*` for guides, `effect://readme/*` for package READMEs, \
    and `effect://api/atom-react/*` or `effect://example/atom-react/*` for atom-react \
    hook references and examples.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and serves the
/// composed resource registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server, composing every catalog against one HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let resource_service = ResourceService::from_config(&config.resources)?;
        Ok(Self::with_service(config, resource_service))
    }

    /// Create a server around an already built resource service.
    pub fn with_service(config: Config, resource_service: ResourceService) -> Self {
        Self {
            config: Arc::new(config),
            resource_service: Arc::new(resource_service),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    ///
    /// Dropping the returned future (e.g. when the HTTP client disconnects)
    /// stops any retries still pending for a remote document.
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }
}

/// Map a failed read onto the protocol's error codes.
fn to_mcp_error(error: ResourceError) -> McpError {
    match error {
        ResourceError::NotFound(_) => McpError::resource_not_found(error.to_string(), None),
        other => {
            warn!("Resource read failed: {}", other);
            McpError::internal_error(other.to_string(), None)
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource_until(&request.uri, context.ct.cancelled())
            .await
            .map_err(to_mcp_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default()).expect("default catalog composes")
    }

    #[test]
    fn test_get_info_advertises_resources_only() {
        let info = server().get_info();
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("effect://readme/"));
    }

    #[tokio::test]
    async fn test_list_resources_json() {
        let resources = server().list_resources().await;
        assert_eq!(resources.len(), 24);

        let hook = resources
            .iter()
            .find(|r| r["uri"] == "effect://api/atom-react/useAtom")
            .expect("useAtom is listed");
        assert_eq!(hook["name"], "useAtom");
        assert_eq!(hook["mimeType"], "text/markdown");
    }

    #[tokio::test]
    async fn test_read_static_resource_json() {
        let result = server()
            .read_resource("effect://guide/atom-react/testing")
            .await
            .unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# Testing atom-react Components"));
    }

    #[tokio::test]
    async fn test_read_unknown_resource_json() {
        let err = server()
            .read_resource("effect://guide/unknown")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }

    #[test]
    fn test_error_mapping() {
        let not_found = to_mcp_error(ResourceError::not_found("effect://x/y"));
        assert_eq!(not_found.code.0, ErrorCode::RESOURCE_NOT_FOUND.0);

        let cancelled = to_mcp_error(ResourceError::Cancelled("effect://x/y".into()));
        assert_eq!(cancelled.code.0, ErrorCode::INTERNAL_ERROR.0);
    }
}
