//! Resource definitions module.
//!
//! Each catalog lives in its own file and builds its own [`ResourceSet`]:
//! - `guides.rs` - long-form guides fetched from GitHub
//! - `readmes.rs` - package READMEs fetched from GitHub
//! - `atom_react.rs` - atom-react API notes, examples and guides (embedded)
//!
//! ## Adding a New Catalog
//!
//! 1. Create a new file (e.g., `my_catalog.rs`)
//! 2. Implement the `CatalogDefinition` trait
//! 3. Add it to `all()` below

mod atom_react;
mod guides;
mod readmes;

pub use atom_react::{AtomReactExamples, AtomReactGuides, AtomReactHooks};
pub use guides::Guides;
pub use readmes::Readmes;

use super::descriptor::ResourceDescriptor;
use super::registry::ResourceSet;

/// URI scheme shared by every published resource.
pub const URI_SCHEME: &str = "effect";

/// Trait for catalog definitions.
///
/// A catalog is a fixed list of descriptors built once at startup.
pub trait CatalogDefinition {
    /// Label used in logs and configuration errors.
    const LABEL: &'static str;

    /// Build the catalog's descriptors.
    fn descriptors() -> Vec<ResourceDescriptor>;

    /// Build the catalog as a standalone resource set.
    fn resource_set() -> ResourceSet {
        ResourceSet::new(Self::LABEL, Self::descriptors())
    }
}

/// Every catalog, in listing order.
pub fn all() -> Vec<ResourceSet> {
    vec![
        Guides::resource_set(),
        Readmes::resource_set(),
        AtomReactHooks::resource_set(),
        AtomReactExamples::resource_set(),
        AtomReactGuides::resource_set(),
    ]
}
