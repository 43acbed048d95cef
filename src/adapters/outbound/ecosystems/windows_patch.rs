use crate::ports::outbound::Capability;
use crate::sbom_generation::domain::{purl_type, InventoryItem, PackageUrl};
use crate::shared::ConversionError;

const WINDOWS: &str = "windows";

/// Metadata attached to Windows OS patch-level inventory
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowsPatchMetadata {
    pub os_name: String,
    pub os_version: String,
    pub build_number: String,
}

/// Capability for Windows OS patch levels reported by DISM
///
/// Only meaningful when the scan ran on Windows; on any other platform PURL
/// resolution reports `UnsupportedPlatform`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsPatchCapability;

impl WindowsPatchCapability {
    pub fn new() -> Self {
        Self
    }
}

impl Capability for WindowsPatchCapability {
    fn name(&self) -> &str {
        "windows/dismpatch"
    }

    fn to_purl(&self, item: &InventoryItem) -> Result<Option<PackageUrl>, ConversionError> {
        let mut purl = PackageUrl::new(purl_type::GENERIC, item.name(), item.version())
            .map_err(|e| e.into_incomplete(item.name()))?
            .with_namespace("microsoft");

        if item.metadata().is_some() {
            let metadata = item.metadata_as::<WindowsPatchMetadata>().ok_or_else(|| {
                ConversionError::UnsupportedMetadata {
                    capability: self.name().to_string(),
                    expected: "Windows patch metadata".to_string(),
                }
            })?;
            purl = purl
                .with_qualifier("buildnumber", metadata.build_number.clone())
                .map_err(|e| e.into_incomplete(item.name()))?;
        }

        Ok(Some(purl))
    }

    fn to_cpes(&self, _item: &InventoryItem) -> Result<Vec<String>, ConversionError> {
        Ok(Vec::new())
    }

    /// OSV defines no Windows ecosystem
    fn ecosystem(&self, _item: &InventoryItem) -> Result<String, ConversionError> {
        Ok(String::new())
    }

    fn target_os(&self) -> Option<&'static str> {
        Some(WINDOWS)
    }
}
