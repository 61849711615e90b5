//! Binds a descriptor's identity to its content operation.

use rmcp::model::{AnnotateAble, RawResource, Resource};

use super::descriptor::{MARKDOWN_MIME_TYPE, ResourceDescriptor};
use super::resolver::{ContentFuture, ContentOperation};

/// One servable resource: identity plus the operation producing its body.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    uri: String,
    name: String,
    description: String,
    remote: bool,
    operation: ContentOperation,
}

impl ResourceEntry {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether reading this entry goes over the network.
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    /// Start resolving the content. Called only when the URI is read.
    pub fn read(&self) -> ContentFuture {
        self.operation.run()
    }

    /// Listing metadata in the protocol's shape.
    pub fn to_resource(&self) -> Resource {
        let mut raw = RawResource::new(self.uri.as_str(), self.name.as_str());
        raw.description = Some(self.description.clone());
        raw.mime_type = Some(MARKDOWN_MIME_TYPE.to_string());
        raw.no_annotation()
    }
}

/// Attach `operation` to the descriptor's identity. Pure wiring, no I/O.
pub fn register(descriptor: &ResourceDescriptor, operation: ContentOperation) -> ResourceEntry {
    ResourceEntry {
        uri: descriptor.uri().to_string(),
        name: descriptor.name().to_string(),
        description: descriptor.description().to_string(),
        remote: descriptor.is_remote(),
        operation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_register_copies_identity() {
        let descriptor =
            ResourceDescriptor::embedded("effect://api/x", "x", "An API note", "content");
        let operation = ContentOperation::new(|| futures::future::ready(Ok("body".to_string())).boxed());

        let entry = register(&descriptor, operation);

        assert_eq!(entry.uri(), "effect://api/x");
        assert_eq!(entry.name(), "x");
        assert_eq!(entry.description(), "An API note");
        assert!(!entry.is_remote());
        assert_eq!(entry.read().await.unwrap(), "body");
    }

    #[test]
    fn test_register_does_not_run_operation() {
        let runs = Arc::new(AtomicU32::new(0));
        let counter = runs.clone();
        let operation = ContentOperation::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(Ok(String::new())).boxed()
        });
        let descriptor =
            ResourceDescriptor::remote("effect://guide/x", "x", "", "https://x/guide.md");

        let entry = register(&descriptor, operation);

        assert!(entry.is_remote());
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        let _ = entry.read();
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_to_resource_metadata() {
        let descriptor =
            ResourceDescriptor::embedded("effect://api/x", "x", "An API note", "content");
        let entry = register(
            &descriptor,
            ContentOperation::new(|| futures::future::ready(Ok(String::new())).boxed()),
        );

        let resource = entry.to_resource();
        assert_eq!(resource.raw.uri, "effect://api/x");
        assert_eq!(resource.raw.name, "x");
        assert_eq!(resource.raw.description.as_deref(), Some("An API note"));
        assert_eq!(resource.raw.mime_type.as_deref(), Some("text/markdown"));
    }
}
