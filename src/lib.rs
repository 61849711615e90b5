//! Effect documentation MCP server.
//!
//! Publishes a catalog of Effect documentation (guides, package READMEs,
//! atom-react API notes and examples) as Model Context Protocol resources.
//! Each resource is either embedded in the binary or fetched from GitHub on
//! demand, with failed fetches retried on a fixed schedule.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**
//!   - **resources**: Catalogs, content resolution, retry and registry composition
//!
//! # Example
//!
//! ```rust,no_run
//! use effect_docs_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
