//! Long-form guides, fetched on every read.

use super::{CatalogDefinition, URI_SCHEME};
use crate::domains::resources::descriptor::ResourceDescriptor;

struct Guide {
    name: &'static str,
    title: &'static str,
    description: &'static str,
    url: &'static str,
}

const GUIDES: &[Guide] = &[Guide {
    name: "writing-effect-code",
    title: "Writing Effect Code Guide - Learn the basics of writing Effect code",
    description: "Essential information for writing Effect code, including:

- Writing basic Effect code
- Writing Effect functions
- Error handling in Effect
- Defining & using Effect services
- Declaring your domain models with Schema
- Adding observability to your Effect code
- Testing Effect code
- Common patterns in Effect code (HttpApi, HttpClient, ManagedRuntime etc.)",
    url: "https://raw.githubusercontent.com/tim-smart/effect-mcp/refs/heads/main/AGENTS.md",
}];

/// Guides served as `effect://guide/{name}`.
pub struct Guides;

impl CatalogDefinition for Guides {
    const LABEL: &'static str = "guides";

    fn descriptors() -> Vec<ResourceDescriptor> {
        GUIDES
            .iter()
            .map(|guide| {
                ResourceDescriptor::remote(
                    format!("{URI_SCHEME}://guide/{}", guide.name),
                    guide.title,
                    guide.description,
                    guide.url,
                )
            })
            .collect()
    }
}
