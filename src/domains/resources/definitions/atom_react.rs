//! atom-react API notes, worked examples and guides, embedded at compile time.

use super::CatalogDefinition;
use crate::domains::resources::descriptor::ResourceDescriptor;

struct StaticDoc {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

fn embed(docs: &[StaticDoc]) -> Vec<ResourceDescriptor> {
    docs.iter()
        .map(|doc| ResourceDescriptor::embedded(doc.uri, doc.name, doc.description, doc.content))
        .collect()
}

const HOOKS: &[StaticDoc] = &[
    StaticDoc {
        uri: "effect://api/atom-react/useAtomRef",
        name: "useAtomRef",
        description: "React hook for subscribing to AtomRef value changes",
        content: include_str!("content/api_atom_react_use_atom_ref.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomRefProp",
        name: "useAtomRefProp",
        description: "React hook for getting a ref to a specific property of an AtomRef object",
        content: include_str!("content/api_atom_react_use_atom_ref_prop.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomRefPropValue",
        name: "useAtomRefPropValue",
        description: "React hook for getting the value of a specific property from an AtomRef object",
        content: include_str!("content/api_atom_react_use_atom_ref_prop_value.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomInitialValues",
        name: "useAtomInitialValues",
        description: "React hook for setting initial values for multiple atoms (useful for SSR hydration)",
        content: include_str!("content/api_atom_react_use_atom_initial_values.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomSubscribe",
        name: "useAtomSubscribe",
        description: "React hook for subscribing to atom changes with a callback function",
        content: include_str!("content/api_atom_react_use_atom_subscribe.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomSuspense",
        name: "useAtomSuspense",
        description: "React hook for accessing Result atoms with Suspense and Error Boundary support",
        content: include_str!("content/api_atom_react_use_atom_suspense.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomRefresh",
        name: "useAtomRefresh",
        description: "React hook that returns a function to manually refresh an atom's value",
        content: include_str!("content/api_atom_react_use_atom_refresh.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomSet",
        name: "useAtomSet",
        description: "React hook that returns only the setter function without subscribing to value",
        content: include_str!("content/api_atom_react_use_atom_set.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomMount",
        name: "useAtomMount",
        description: "React hook for mounting an atom to ensure subscription is active",
        content: include_str!("content/api_atom_react_use_atom_mount.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtom",
        name: "useAtom",
        description: "React hook for read-write access to writable atoms",
        content: include_str!("content/api_atom_react_use_atom.md"),
    },
    StaticDoc {
        uri: "effect://api/atom-react/useAtomValue",
        name: "useAtomValue",
        description: "React hook for subscribing to atom values with automatic updates",
        content: include_str!("content/api_atom_react_use_atom_value.md"),
    },
];

const EXAMPLES: &[StaticDoc] = &[
    StaticDoc {
        uri: "effect://example/atom-react/optimistic",
        name: "atom-react-optimistic",
        description: "Update UI immediately, sync in background with rollback on error",
        content: include_str!("content/example_atom_react_optimistic.md"),
    },
    StaticDoc {
        uri: "effect://example/atom-react/ssr",
        name: "atom-react-ssr",
        description: "Server-side rendering with state serialization and client hydration",
        content: include_str!("content/example_atom_react_ssr.md"),
    },
    StaticDoc {
        uri: "effect://example/atom-react/effectful",
        name: "atom-react-effectful",
        description: "Integrate Effect services with atom-react using ManagedRuntime",
        content: include_str!("content/example_atom_react_effectful.md"),
    },
    StaticDoc {
        uri: "effect://example/atom-react/derived",
        name: "atom-react-derived",
        description: "Compute derived state using Atom.fn and Effect.gen",
        content: include_str!("content/example_atom_react_derived.md"),
    },
    StaticDoc {
        uri: "effect://example/atom-react/basic",
        name: "atom-react-basic",
        description: "Simple counter demonstrating useAtomValue and useAtom hooks",
        content: include_str!("content/example_atom_react_basic.md"),
    },
];

const GUIDES: &[StaticDoc] = &[
    StaticDoc {
        uri: "effect://guide/atom-react/testing",
        name: "atom-react-testing",
        description: "Complete guide for testing atom-react components with @effect/vitest and React Testing Library",
        content: include_str!("content/guide_atom_react_testing.md"),
    },
    StaticDoc {
        uri: "effect://guide/atom-react/services",
        name: "atom-react-services",
        description: "Complete guide for using Effect services in atom-react applications",
        content: include_str!("content/guide_atom_react_services.md"),
    },
];

/// Hook reference pages under `effect://api/atom-react/`.
pub struct AtomReactHooks;

impl CatalogDefinition for AtomReactHooks {
    const LABEL: &'static str = "atom-react-hooks";

    fn descriptors() -> Vec<ResourceDescriptor> {
        embed(HOOKS)
    }
}

/// Worked examples under `effect://example/atom-react/`.
pub struct AtomReactExamples;

impl CatalogDefinition for AtomReactExamples {
    const LABEL: &'static str = "atom-react-examples";

    fn descriptors() -> Vec<ResourceDescriptor> {
        embed(EXAMPLES)
    }
}

/// Guides under `effect://guide/atom-react/`.
pub struct AtomReactGuides;

impl CatalogDefinition for AtomReactGuides {
    const LABEL: &'static str = "atom-react-guides";

    fn descriptors() -> Vec<ResourceDescriptor> {
        embed(GUIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::descriptor::ContentSource;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(AtomReactHooks::descriptors().len(), 11);
        assert_eq!(AtomReactExamples::descriptors().len(), 5);
        assert_eq!(AtomReactGuides::descriptors().len(), 2);
    }

    #[test]
    fn test_embedded_content_matches_name() {
        for doc in HOOKS {
            assert!(
                doc.content.starts_with(&format!("# {} Hook", doc.name)),
                "{} content does not start with its heading",
                doc.name
            );
        }
    }

    #[test]
    fn test_all_embedded() {
        let descriptors = AtomReactHooks::descriptors()
            .into_iter()
            .chain(AtomReactExamples::descriptors())
            .chain(AtomReactGuides::descriptors());
        for d in descriptors {
            match d.source() {
                ContentSource::Static(text) => assert!(!text.trim().is_empty(), "{}", d.uri()),
                ContentSource::Remote(_) => panic!("{} should be embedded", d.uri()),
            }
        }
    }
}
