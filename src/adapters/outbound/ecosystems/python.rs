use crate::ports::outbound::Capability;
use crate::sbom_generation::domain::{purl_type, InventoryItem, PackageUrl};
use crate::shared::ConversionError;

const PYPI_ECOSYSTEM: &str = "PyPI";

/// Capability for Python packages (wheels, eggs, lockfile entries)
///
/// PyPI names are case-insensitive, so the PURL name is lowercased.
/// Versions are required.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonPackageCapability;

impl PythonPackageCapability {
    pub fn new() -> Self {
        Self
    }
}

impl Capability for PythonPackageCapability {
    fn name(&self) -> &str {
        "python/package"
    }

    fn to_purl(&self, item: &InventoryItem) -> Result<Option<PackageUrl>, ConversionError> {
        let purl = PackageUrl::new(purl_type::PYPI, item.name().to_lowercase(), item.version())
            .map_err(|e| e.into_incomplete(item.name()))?;
        Ok(Some(purl))
    }

    fn to_cpes(&self, _item: &InventoryItem) -> Result<Vec<String>, ConversionError> {
        Ok(Vec::new())
    }

    fn ecosystem(&self, _item: &InventoryItem) -> Result<String, ConversionError> {
        Ok(PYPI_ECOSYSTEM.to_string())
    }
}
