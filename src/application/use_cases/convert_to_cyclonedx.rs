use crate::application::dto::CdxConfig;
use crate::application::use_cases::{TOOL_HOMEPAGE, TOOL_NAME};
use crate::sbom_generation::domain::cyclonedx_bom::{
    Component, ComponentType, ExternalReference, ExternalReferenceType, Metadata,
    OrganizationalContact,
};
use crate::sbom_generation::domain::{CycloneDxBom, ScanResult};
use crate::sbom_generation::services::{creation_timestamp, IdentifierSource, PurlResolver};
use crate::shared::ConversionError;
use tracing::warn;

/// ConvertToCycloneDxUseCase - Builds a flat CycloneDX BOM from a scan result
///
/// No dependency graph is emitted: the inventory carries no nesting, so
/// none is inferred. Identifiers are drawn for the root component first,
/// then one per converted item.
///
/// # Type Parameters
/// * `S` - IdentifierSource implementation
pub struct ConvertToCycloneDxUseCase<S> {
    config: CdxConfig,
    ids: S,
}

impl<S: IdentifierSource> ConvertToCycloneDxUseCase<S> {
    pub fn new(config: CdxConfig, ids: S) -> Self {
        Self { config, ids }
    }

    /// Executes the conversion
    ///
    /// # Errors
    /// Returns `FatalInitialization` if the identifier source fails
    pub fn execute(&mut self, scan: &ScanResult) -> Result<CycloneDxBom, ConversionError> {
        let metadata = self.build_metadata()?;

        let mut components = Vec::with_capacity(scan.len());
        for item in scan.items() {
            let purl = match PurlResolver::resolve(item) {
                Ok(purl) => purl,
                Err(e) if e.is_recoverable() => {
                    warn!(
                        item = item.name(),
                        error = %e,
                        "Skipping inventory item without a resolvable package URL"
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            components.push(Component {
                bom_ref: Some(self.ids.next_uuid()?.to_string()),
                component_type: Some(ComponentType::Library),
                name: item.name().to_string(),
                version: item.version().to_string(),
                purl: Some(purl.to_string()),
                external_references: Vec::new(),
            });
        }

        Ok(CycloneDxBom::new(metadata, components))
    }

    fn build_metadata(&mut self) -> Result<Metadata, ConversionError> {
        let component = Component {
            bom_ref: Some(self.ids.next_uuid()?.to_string()),
            name: self.config.component_name.clone().unwrap_or_default(),
            version: self.config.component_version.clone().unwrap_or_default(),
            ..Component::default()
        };

        let authors = self
            .config
            .authors
            .iter()
            .map(|name| OrganizationalContact { name: name.clone() })
            .collect();

        Ok(Metadata {
            timestamp: creation_timestamp(),
            component,
            authors,
            tools: vec![Self::tool_component()],
        })
    }

    fn tool_component() -> Component {
        Component {
            component_type: Some(ComponentType::Application),
            name: TOOL_NAME.to_string(),
            external_references: vec![ExternalReference {
                url: TOOL_HOMEPAGE.to_string(),
                reference_type: ExternalReferenceType::Website,
            }],
            ..Component::default()
        }
    }
}
