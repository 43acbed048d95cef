use crate::sbom_generation::domain::Creator;
use serde::Deserialize;

/// SpdxConfig - Caller-supplied settings for SPDX document conversion
///
/// Unset (or empty) name and namespace fall back to tool-generated values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpdxConfig {
    /// Overrides the default document name
    pub document_name: Option<String>,
    /// Overrides the generated `https://spdx.google/<uuid>` namespace
    pub document_namespace: Option<String>,
    /// Extra creators listed after the SCALIBR tool entry
    pub creators: Vec<Creator>,
}

impl SpdxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    pub fn with_document_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.document_namespace = Some(namespace.into());
        self
    }

    pub fn with_creator(mut self, creator: Creator) -> Self {
        self.creators.push(creator);
        self
    }

    pub(crate) fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn document_namespace(&self) -> Option<&str> {
        self.document_namespace.as_deref().filter(|s| !s.is_empty())
    }
}
