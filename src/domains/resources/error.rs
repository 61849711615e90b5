//! Resource-specific error types.

use thiserror::Error;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A single failed attempt at fetching a remote document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The server answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

impl FetchError {
    /// Create a transport error for `url`.
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create an HTTP status error for `url`.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::HttpStatus { url, .. } => url,
        }
    }
}

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Every attempt allowed by the retry policy failed.
    #[error("Failed to fetch {uri} after {attempts} attempt(s): {source}")]
    RetryExhausted {
        uri: String,
        attempts: u32,
        #[source]
        source: FetchError,
    },

    /// Two merged resource sets registered the same URI.
    #[error("Duplicate resource URI {uri}: registered by both `{first}` and `{second}`")]
    DuplicateUri {
        uri: String,
        first: String,
        second: String,
    },

    /// A catalog entry is malformed.
    #[error("Invalid resource descriptor {uri}: {reason}")]
    InvalidDescriptor { uri: String, reason: String },

    /// The caller went away before the content was resolved.
    #[error("Read of {0} was cancelled")]
    Cancelled(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid descriptor" error.
    pub fn invalid_descriptor(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error stems from a bad catalog rather than a failed read.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUri { .. } | Self::InvalidDescriptor { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_retry_exhausted_keeps_last_cause() {
        let err = ResourceError::RetryExhausted {
            uri: "effect://readme/pkg".to_string(),
            attempts: 4,
            source: FetchError::status("https://x/readme.md", 503),
        };

        let msg = err.to_string();
        assert!(msg.contains("effect://readme/pkg"));
        assert!(msg.contains("4 attempt"));

        let cause = err.source().expect("cause");
        assert_eq!(cause.to_string(), "https://x/readme.md responded with HTTP 503");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(ResourceError::invalid_descriptor("x", "empty").is_configuration());
        assert!(
            ResourceError::DuplicateUri {
                uri: "effect://guide/x".into(),
                first: "a".into(),
                second: "b".into(),
            }
            .is_configuration()
        );
        assert!(!ResourceError::not_found("x").is_configuration());
    }

    #[test]
    fn test_fetch_error_url() {
        let err = FetchError::transport(
            "https://x/a.md",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        );
        assert_eq!(err.url(), "https://x/a.md");
        assert!(err.to_string().contains("refused"));
    }
}
