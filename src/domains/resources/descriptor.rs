//! Resource descriptors: a stable identity plus where the content comes from.

use std::borrow::Cow;

use super::error::ResourceError;

/// MIME type of every document this server publishes.
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// Where a resource's content is obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Text embedded in the catalog.
    Static(Cow<'static, str>),

    /// Document fetched from this URL on every read.
    Remote(String),
}

/// Immutable description of one published resource.
///
/// Fields are private; a descriptor cannot change once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    uri: String,
    name: String,
    description: String,
    source: ContentSource,
}

impl ResourceDescriptor {
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        source: ContentSource,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: description.into(),
            source,
        }
    }

    /// Descriptor whose content is compiled into the binary.
    pub fn embedded(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        text: &'static str,
    ) -> Self {
        Self::new(uri, name, description, ContentSource::Static(Cow::Borrowed(text)))
    }

    /// Descriptor whose content is fetched from `url`.
    pub fn remote(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::new(uri, name, description, ContentSource::Remote(url.into()))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.source, ContentSource::Remote(_))
    }

    /// Check the descriptor is servable.
    ///
    /// URIs must look like `scheme://category/identifier`; remote sources
    /// must be absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ResourceError> {
        let invalid = |reason: &str| Err(ResourceError::invalid_descriptor(&self.uri, reason));

        let Some((scheme, rest)) = self.uri.split_once("://") else {
            return invalid("URI has no scheme");
        };
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return invalid("URI scheme is empty or malformed");
        }
        match rest.split_once('/') {
            Some((category, identifier)) if !category.is_empty() && !identifier.is_empty() => {}
            _ => return invalid("URI must be of the form scheme://category/identifier"),
        }

        if self.name.trim().is_empty() {
            return invalid("name is empty");
        }

        if let ContentSource::Remote(url) = &self.source {
            match reqwest::Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return invalid(&format!("unsupported URL scheme `{}`", parsed.scheme()));
                }
                Err(e) => return invalid(&format!("malformed URL {url}: {e}")),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_descriptor() {
        let d = ResourceDescriptor::embedded("effect://api/x", "x", "An API note", "content");
        assert_eq!(d.uri(), "effect://api/x");
        assert!(!d.is_remote());
        assert_eq!(d.source(), &ContentSource::Static(Cow::Borrowed("content")));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_remote_descriptor() {
        let d = ResourceDescriptor::remote(
            "scheme://readme/pkg-a",
            "pkg-a README",
            "",
            "https://x/readme.md",
        );
        assert!(d.is_remote());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_uris() {
        for uri in ["", "no-scheme", "://guide/x", "effect://guide", "effect://guide/", "effect:///x"] {
            let d = ResourceDescriptor::embedded(uri, "name", "", "text");
            let err = d.validate().expect_err(uri);
            assert!(err.is_configuration(), "{uri}");
        }
    }

    #[test]
    fn test_validate_accepts_nested_identifier() {
        let d = ResourceDescriptor::remote(
            "effect://readme/@effect/cli",
            "@effect/cli README",
            "",
            "https://raw.githubusercontent.com/Effect-TS/effect/refs/heads/main/packages/cli/README.md",
        );
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_remote_url() {
        let d = ResourceDescriptor::remote("effect://guide/x", "x", "", "not a url");
        assert!(matches!(
            d.validate(),
            Err(ResourceError::InvalidDescriptor { .. })
        ));

        let d = ResourceDescriptor::remote("effect://guide/x", "x", "", "ftp://host/file.md");
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let d = ResourceDescriptor::embedded("effect://api/x", "  ", "", "text");
        assert!(d.validate().is_err());
    }
}
