use crate::ports::outbound::Capability;
use crate::sbom_generation::domain::{purl_type, InventoryItem, PackageUrl};
use crate::shared::ConversionError;

/// Metadata attached to packages read out of an existing SPDX SBOM
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpdxSbomMetadata {
    pub purl: Option<PackageUrl>,
    pub cpes: Vec<String>,
}

/// Capability for packages listed in an SPDX SBOM found on disk
///
/// The SBOM already asserts PURLs and CPEs, so both are passed through as-is.
/// Versions are optional: the SBOM may describe unversioned components.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpdxSbomCapability;

impl SpdxSbomCapability {
    pub fn new() -> Self {
        Self
    }

    fn metadata<'a>(
        &self,
        item: &'a InventoryItem,
    ) -> Result<&'a SpdxSbomMetadata, ConversionError> {
        item.metadata_as::<SpdxSbomMetadata>()
            .ok_or_else(|| ConversionError::UnsupportedMetadata {
                capability: self.name().to_string(),
                expected: "SPDX SBOM metadata".to_string(),
            })
    }
}

impl Capability for SpdxSbomCapability {
    fn name(&self) -> &str {
        "sbom/spdx"
    }

    fn to_purl(&self, item: &InventoryItem) -> Result<Option<PackageUrl>, ConversionError> {
        Ok(self.metadata(item)?.purl.clone())
    }

    fn to_cpes(&self, item: &InventoryItem) -> Result<Vec<String>, ConversionError> {
        Ok(self.metadata(item)?.cpes.clone())
    }

    /// Maps the asserted PURL type to its OSV ecosystem; unknown types map to ""
    fn ecosystem(&self, item: &InventoryItem) -> Result<String, ConversionError> {
        let ecosystem = match self.metadata(item)?.purl.as_ref().map(|p| p.purl_type()) {
            Some(purl_type::PYPI) => "PyPI",
            Some(purl_type::NPM) => "npm",
            Some(purl_type::CARGO) => "crates.io",
            Some(purl_type::GOLANG) => "Go",
            Some(purl_type::MAVEN) => "Maven",
            _ => "",
        };
        Ok(ecosystem.to_string())
    }

    fn version_required(&self) -> bool {
        false
    }
}
