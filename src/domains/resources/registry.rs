//! Resource Registry - composition of independently built resource sets.
//!
//! Each catalog in `definitions/` produces its own [`ResourceSet`]. The
//! [`RegistryBuilder`] merges any number of them into one
//! [`ResourceRegistry`], backing every remote entry with the same fetcher.
//!
//! A URI registered by two sets is a configuration error: composition fails
//! instead of letting one entry shadow the other.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, info};

use super::definitions;
use super::descriptor::ResourceDescriptor;
use super::error::ResourceError;
use super::fetcher::DocumentFetcher;
use super::registrar::{ResourceEntry, register};
use super::resolver::ContentResolver;
use super::retry::RetryPolicy;

/// Descriptors built from one catalog, not yet bound to a fetcher.
#[derive(Debug, Clone)]
pub struct ResourceSet {
    label: String,
    descriptors: Vec<ResourceDescriptor>,
}

impl ResourceSet {
    pub fn new(label: impl Into<String>, descriptors: Vec<ResourceDescriptor>) -> Self {
        Self {
            label: label.into(),
            descriptors,
        }
    }

    /// Name used in logs and duplicate-URI errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn descriptors(&self) -> &[ResourceDescriptor] {
        &self.descriptors
    }

    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(ResourceDescriptor::uri)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Collects resource sets and binds them into a registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    sets: Vec<ResourceSet>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a set. Order only affects listing order.
    pub fn merge(mut self, set: ResourceSet) -> Self {
        self.sets.push(set);
        self
    }

    pub fn merge_all(mut self, sets: impl IntoIterator<Item = ResourceSet>) -> Self {
        self.sets.extend(sets);
        self
    }

    /// Validate every descriptor and wire it to one shared resolver.
    ///
    /// Fails on the first malformed descriptor or duplicate URI.
    pub fn build(
        self,
        fetcher: Arc<dyn DocumentFetcher>,
        policy: RetryPolicy,
    ) -> Result<ResourceRegistry, ResourceError> {
        let resolver = ContentResolver::new(fetcher, policy);
        let mut owners: HashMap<String, String> = HashMap::new();
        let mut entries = Vec::new();

        for set in &self.sets {
            debug!("Merging resource set `{}` ({} entries)", set.label(), set.len());

            for descriptor in set.descriptors() {
                descriptor.validate()?;

                match owners.entry(descriptor.uri().to_string()) {
                    Entry::Occupied(existing) => {
                        return Err(ResourceError::DuplicateUri {
                            uri: descriptor.uri().to_string(),
                            first: existing.get().clone(),
                            second: set.label().to_string(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(set.label().to_string());
                    }
                }

                debug!("Registering resource: {}", descriptor.uri());
                entries.push(register(descriptor, resolver.resolve(descriptor)));
            }
        }

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.uri().to_string(), i))
            .collect();

        let remote = entries.iter().filter(|e| e.is_remote()).count();
        info!(
            "Composed {} resources from {} sets ({} remote, retry every {:?} up to {} times)",
            entries.len(),
            self.sets.len(),
            remote,
            policy.interval(),
            policy.times()
        );

        Ok(ResourceRegistry { entries, index })
    }
}

/// The merged, servable set of resources.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    entries: Vec<ResourceEntry>,
    index: HashMap<String, usize>,
}

impl ResourceRegistry {
    pub fn get(&self, uri: &str) -> Option<&ResourceEntry> {
        self.index.get(uri).map(|&i| &self.entries[i])
    }

    /// Entries in merge order.
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ResourceEntry::uri)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every catalog this server publishes, one set per catalog.
pub fn get_all_resource_sets() -> Vec<ResourceSet> {
    definitions::all()
}

/// Compose the full catalog against `fetcher`.
pub fn compose_all(
    fetcher: Arc<dyn DocumentFetcher>,
    policy: RetryPolicy,
) -> Result<ResourceRegistry, ResourceError> {
    RegistryBuilder::new()
        .merge_all(get_all_resource_sets())
        .build(fetcher, policy)
}
