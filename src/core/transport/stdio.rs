//! STDIO transport implementation.
//!
//! One MCP session over stdin/stdout. Logs go to stderr so they never mix
//! with protocol frames.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "Ready - serving {} v{} over stdin/stdout",
            server.name(),
            server.version()
        );

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
