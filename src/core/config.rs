//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use crate::domains::resources::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Delay between attempts when fetching a remote document.
    pub retry_interval_ms: u64,

    /// Retries after the first failed attempt.
    pub retry_times: u32,

    /// Per-attempt deadline for remote fetches. No deadline when unset.
    pub request_timeout_secs: Option<u64>,

    /// User-Agent header sent with remote fetches.
    pub user_agent: String,
    // Catalogs are registered in domains/resources/definitions/mod.rs
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl ResourcesConfig {
    /// Retry policy applied to every remote fetch.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::spaced(Duration::from_millis(self.retry_interval_ms), self.retry_times)
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            retry_interval_ms: RetryPolicy::DEFAULT_INTERVAL.as_millis() as u64,
            retry_times: RetryPolicy::DEFAULT_TIMES,
            request_timeout_secs: None,
            user_agent: format!("effect-docs-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "effect-docs-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

/// Parse a numeric env var, keeping `current` when absent or malformed.
fn env_number<T: FromStr + Copy>(key: &str, current: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring {}={:?}: not a valid number", key, raw);
                current
            }
        },
        Err(_) => current,
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        let resources = &mut config.resources;
        resources.retry_interval_ms =
            env_number("MCP_FETCH_RETRY_INTERVAL_MS", resources.retry_interval_ms);
        resources.retry_times = env_number("MCP_FETCH_RETRY_TIMES", resources.retry_times);

        if let Ok(raw) = std::env::var("MCP_FETCH_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    resources.request_timeout_secs = Some(secs);
                    info!("Remote fetch timeout set to {}s", secs);
                }
                _ => warn!("Ignoring MCP_FETCH_TIMEOUT_SECS={:?}", raw),
            }
        }

        if let Ok(user_agent) = std::env::var("MCP_FETCH_USER_AGENT") {
            resources.user_agent = user_agent;
        }

        config
    }
}
