//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! the resources domain, the transports and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// This enum captures all possible error conditions that can occur during
/// server operation, including domain-specific errors and external failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Configuration-related errors outside the resource catalog.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failures while serving clients.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the server should refuse to start because of this error.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Resource(e) => e.is_configuration(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::ResourceError;

    #[test]
    fn test_resource_configuration_errors_are_fatal() {
        let err: Error = ResourceError::invalid_descriptor("effect://x", "bad").into();
        assert!(err.is_configuration());

        let err: Error = ResourceError::not_found("effect://api/x").into();
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "Resource error: Resource not found: effect://api/x");
    }
}
