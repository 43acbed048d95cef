use serde::Deserialize;

/// CdxConfig - Caller-supplied settings for CycloneDX BOM conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CdxConfig {
    /// Name of the root component the BOM describes
    pub component_name: Option<String>,
    /// Version of the root component
    pub component_version: Option<String>,
    /// Author names, each mapped to one organizational contact
    pub authors: Vec<String>,
}

impl CdxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self.component_version = Some(version.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }
}
