//! Resources domain module.
//!
//! This module publishes the documentation catalog as MCP resources. Each
//! resource is either embedded text or a remote document fetched on demand.
//!
//! ## Architecture
//!
//! - `definitions/` - The catalogs (one file per catalog)
//! - `descriptor.rs` - Resource identity plus content source
//! - `retry.rs` - Fixed-interval bounded retry combinator
//! - `fetcher.rs` - Network client capability (reqwest-backed)
//! - `resolver.rs` - Turns descriptors into deferred content operations
//! - `registrar.rs` - Binds identity to a content operation
//! - `registry.rs` - Merges resource sets into one registry
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Catalog
//!
//! 1. Create a new file in `definitions/` (e.g., `my_catalog.rs`)
//! 2. Implement the `CatalogDefinition` trait
//! 3. Add it to `definitions::all()`
//!
//! **No need to modify `service.rs`!**

pub mod definitions;
mod descriptor;
mod error;
mod fetcher;
mod registrar;
mod registry;
mod resolver;
mod retry;
mod service;

pub use definitions::CatalogDefinition;
pub use descriptor::{ContentSource, MARKDOWN_MIME_TYPE, ResourceDescriptor};
pub use error::{FetchError, ResourceError};
pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use registrar::{ResourceEntry, register};
pub use registry::{
    RegistryBuilder, ResourceRegistry, ResourceSet, compose_all, get_all_resource_sets,
};
pub use resolver::{ContentFuture, ContentOperation, ContentResolver};
pub use retry::{Exhausted, RetryPolicy, retry_fixed};
pub use service::ResourceService;
