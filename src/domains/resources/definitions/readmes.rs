//! Package READMEs, fetched on every read.

use super::{CatalogDefinition, URI_SCHEME};
use crate::domains::resources::descriptor::ResourceDescriptor;

struct Readme {
    package: &'static str,
    description: &'static str,
    url: &'static str,
}

const READMES: &[Readme] = &[
    Readme {
        package: "@effect/cli",
        description: "README.md for the @effect/cli package, for implementing command line interfaces with Effect.",
        url: "https://raw.githubusercontent.com/Effect-TS/effect/refs/heads/main/packages/cli/README.md",
    },
    Readme {
        package: "@effect/platform",
        description: "README.md for the @effect/platform package.

Contains information about:
- HttpApi
- HttpClient
- HttpServer
- HttpLayerRouter",
        url: "https://raw.githubusercontent.com/Effect-TS/effect/refs/heads/main/packages/platform/README.md",
    },
    Readme {
        package: "@effect/rpc",
        description: "README.md for the @effect/rpc package, for implementing rpc servers and clients.
Contains information about:
- RpcServer
- RpcClient
- RpcMiddleware",
        url: "https://raw.githubusercontent.com/Effect-TS/effect/refs/heads/main/packages/rpc/README.md",
    },
    Readme {
        package: "@effect/sql",
        description: "README.md for the @effect/sql package, for interacting with SQL databases.",
        url: "https://raw.githubusercontent.com/Effect-TS/effect/refs/heads/main/packages/sql/README.md",
    },
    Readme {
        package: "@effect-atom/atom-react",
        description: "README.md for the @effect-atom/atom-react package, for implementing reactive state management with Effect.",
        url: "https://raw.githubusercontent.com/tim-smart/effect-atom/refs/heads/main/README.md",
    },
];

/// READMEs served as `effect://readme/{package}`.
pub struct Readmes;

impl CatalogDefinition for Readmes {
    const LABEL: &'static str = "readmes";

    fn descriptors() -> Vec<ResourceDescriptor> {
        READMES
            .iter()
            .map(|readme| {
                ResourceDescriptor::remote(
                    format!("{URI_SCHEME}://readme/{}", readme.package),
                    format!("{} README", readme.package),
                    readme.description,
                    readme.url,
                )
            })
            .collect()
    }
}
