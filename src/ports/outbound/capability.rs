use crate::sbom_generation::domain::{InventoryItem, PackageUrl};
use crate::shared::ConversionError;

/// Capability port answering identity questions about inventory items
///
/// One implementation exists per ecosystem. Items hold a shared reference to
/// the capability of the extractor that produced them, so conversion never
/// goes through a global registry.
pub trait Capability: Send + Sync {
    /// Stable name of the ecosystem plugin (e.g. `python/package`)
    fn name(&self) -> &str;

    /// Derives the Package URL of an item
    ///
    /// # Returns
    /// `Ok(None)` when the item lacks the data to build a PURL
    ///
    /// # Errors
    /// Returns an error if the item's metadata has an unexpected shape
    fn to_purl(&self, item: &InventoryItem) -> Result<Option<PackageUrl>, ConversionError>;

    /// Derives the CPEs of an item. Most ecosystems infer none.
    fn to_cpes(&self, item: &InventoryItem) -> Result<Vec<String>, ConversionError>;

    /// Returns the OSV ecosystem name of an item (e.g. `PyPI`)
    fn ecosystem(&self, item: &InventoryItem) -> Result<String, ConversionError>;

    /// Operating system the items are exclusively valid on, as reported by
    /// `std::env::consts::OS`. `None` means any platform.
    fn target_os(&self) -> Option<&'static str> {
        None
    }

    /// Whether a PURL without a version is incomplete for this ecosystem
    fn version_required(&self) -> bool {
        true
    }
}
