//! Domains module containing business logic organized by bounded contexts.
//!
//! This server has a single domain: **resources**, the documentation catalog
//! published to MCP clients.

pub mod resources;
