use crate::sbom_generation::domain::{InventoryItem, PackageUrl};
use crate::shared::ConversionError;

/// PurlResolver service turning inventory items into canonical Package URLs
///
/// Resolution goes through the item's own capability object. Every failure
/// here is per-item: callers drop the item and carry on.
pub struct PurlResolver;

impl PurlResolver {
    /// Resolves the PURL of an item on the running platform
    ///
    /// # Errors
    /// * `UnsupportedPlatform` - the item is only meaningful on another OS
    /// * `IncompleteItem` - no PURL, no type, no name, or no version where one is required
    /// * `UnsupportedMetadata` - the capability could not read the item's metadata
    pub fn resolve(item: &InventoryItem) -> Result<PackageUrl, ConversionError> {
        Self::resolve_for_os(item, std::env::consts::OS)
    }

    /// Resolves the PURL of an item as if running on `current_os`
    pub fn resolve_for_os(
        item: &InventoryItem,
        current_os: &str,
    ) -> Result<PackageUrl, ConversionError> {
        let capability = item.capability();

        if let Some(required) = capability.target_os() {
            if required != current_os {
                return Err(ConversionError::UnsupportedPlatform {
                    name: item.name().to_string(),
                    required: required.to_string(),
                    current: current_os.to_string(),
                });
            }
        }

        let purl = capability
            .to_purl(item)?
            .ok_or_else(|| ConversionError::IncompleteItem {
                name: item.name().to_string(),
                reason: format!("'{}' produced no package URL", capability.name()),
            })?;

        if purl.purl_type().is_empty() {
            return Err(ConversionError::IncompleteItem {
                name: item.name().to_string(),
                reason: "package URL has no type".to_string(),
            });
        }

        if purl.name().is_empty() {
            return Err(ConversionError::IncompleteItem {
                name: item.name().to_string(),
                reason: "package URL has no name".to_string(),
            });
        }

        if purl.version().is_empty() && capability.version_required() {
            return Err(ConversionError::IncompleteItem {
                name: item.name().to_string(),
                reason: "package URL has no version".to_string(),
            });
        }

        Ok(purl)
    }

    /// Resolves the OSV ecosystem of an item
    pub fn ecosystem(item: &InventoryItem) -> Result<String, ConversionError> {
        item.capability().ecosystem(item)
    }
}
