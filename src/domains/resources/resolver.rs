//! Content resolution.
//!
//! Turns a descriptor into a [`ContentOperation`]: a deferred computation the
//! host runs only when the resource is read. Static sources complete
//! immediately; remote sources GET their URL under the retry policy on every
//! run. Nothing is cached and concurrent runs do not share an in-flight fetch.

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use tracing::{debug, warn};

use super::descriptor::{ContentSource, ResourceDescriptor};
use super::error::ResourceError;
use super::fetcher::DocumentFetcher;
use super::retry::{RetryPolicy, retry_fixed};

/// Future produced by one run of a content operation.
pub type ContentFuture = BoxFuture<'static, Result<String, ResourceError>>;

/// A deferred, re-runnable content computation.
#[derive(Clone)]
pub struct ContentOperation(Arc<dyn Fn() -> ContentFuture + Send + Sync>);

impl ContentOperation {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> ContentFuture + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Start one resolution.
    pub fn run(&self) -> ContentFuture {
        (self.0)()
    }
}

impl fmt::Debug for ContentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentOperation(..)")
    }
}

/// Builds content operations, sharing one fetcher and one retry policy.
#[derive(Clone)]
pub struct ContentResolver {
    fetcher: Arc<dyn DocumentFetcher>,
    policy: RetryPolicy,
}

impl ContentResolver {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, policy: RetryPolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Wrap the descriptor's source in a deferred operation. Performs no I/O.
    pub fn resolve(&self, descriptor: &ResourceDescriptor) -> ContentOperation {
        match descriptor.source() {
            ContentSource::Static(text) => {
                let text = text.clone();
                ContentOperation::new(move || future::ready(Ok(text.to_string())).boxed())
            }
            ContentSource::Remote(url) => {
                let fetcher = self.fetcher.clone();
                let policy = self.policy;
                let uri = descriptor.uri().to_string();
                let url = url.clone();
                ContentOperation::new(move || {
                    let fetcher = fetcher.clone();
                    let uri = uri.clone();
                    let url = url.clone();
                    async move { fetch_remote(fetcher.as_ref(), policy, &uri, &url).await }.boxed()
                })
            }
        }
    }
}

async fn fetch_remote(
    fetcher: &dyn DocumentFetcher,
    policy: RetryPolicy,
    uri: &str,
    url: &str,
) -> Result<String, ResourceError> {
    debug!("Resolving {} from {}", uri, url);

    retry_fixed(policy, move || fetcher.get_text(url))
        .await
        .map_err(|exhausted| {
            warn!(
                "Giving up on {} after {} attempt(s): {}",
                uri, exhausted.attempts, exhausted.last
            );
            ResourceError::RetryExhausted {
                uri: uri.to_string(),
                attempts: exhausted.attempts,
                source: exhausted.last,
            }
        })
}


#[cfg(test)]
mod tests {
    use super::testing::{EchoFetcher, ScriptedFetcher};
    use super::*;
    use std::error::Error as _;
    use std::time::Duration;
    use tokio::time::Instant;
    use tokio_test::{assert_ready, task};

    use crate::domains::resources::error::FetchError;

    fn resolver(fetcher: Arc<dyn DocumentFetcher>) -> ContentResolver {
        ContentResolver::new(fetcher, RetryPolicy::spaced(Duration::from_millis(500), 3))
    }

    #[test]
    fn test_static_source_is_immediate_and_offline() {
        let fetcher = Arc::new(EchoFetcher::default());
        let descriptor =
            ResourceDescriptor::embedded("effect://api/x", "x", "An API note", "content");
        let operation = resolver(fetcher.clone()).resolve(&descriptor);

        for _ in 0..3 {
            let mut fut = task::spawn(operation.run());
            let result = assert_ready!(fut.poll());
            assert_eq!(result.unwrap(), "content");
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_recovers_after_server_errors() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Err(500), Err(500), Ok("hello")]));
        let descriptor = ResourceDescriptor::remote(
            "scheme://readme/pkg-a",
            "pkg-a README",
            "",
            "https://x/readme.md",
        );
        let operation = resolver(fetcher.clone()).resolve(&descriptor);

        let started = Instant::now();
        let body = operation.run().await.unwrap();

        assert_eq!(body, "hello");
        assert_eq!(fetcher.calls(), 3);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_exhaustion_surfaces_last_error() {
        let fetcher = Arc::new(ScriptedFetcher::always_failing(503));
        let descriptor =
            ResourceDescriptor::remote("effect://readme/pkg", "pkg", "", "https://x/readme.md");
        let operation = resolver(fetcher.clone()).resolve(&descriptor);

        let started = Instant::now();
        let err = operation.run().await.unwrap_err();

        assert_eq!(fetcher.calls(), 4);
        assert!(started.elapsed() >= Duration::from_millis(1500));
        match &err {
            ResourceError::RetryExhausted {
                uri,
                attempts,
                source: FetchError::HttpStatus { status, .. },
            } => {
                assert_eq!(uri, "effect://readme/pkg");
                assert_eq!(*attempts, 4);
                assert_eq!(*status, 503);
            }
            other => panic!("Expected RetryExhausted, got {:?}", other),
        }
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn test_remote_fetches_on_every_run() {
        let fetcher = Arc::new(EchoFetcher::default());
        let descriptor =
            ResourceDescriptor::remote("effect://guide/x", "x", "", "https://x/guide.md");
        let operation = resolver(fetcher.clone()).resolve(&descriptor);

        assert_eq!(fetcher.calls(), 0);
        let (a, b) = tokio::join!(operation.run(), operation.run());
        assert_eq!(a.unwrap(), "body of https://x/guide.md");
        assert_eq!(b.unwrap(), "body of https://x/guide.md");
        assert_eq!(fetcher.calls(), 2);
    }
}
