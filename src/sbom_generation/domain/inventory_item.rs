use crate::ports::outbound::Capability;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased, ecosystem-specific metadata attached by the extractor that
/// produced an item. Capabilities downcast it to the shape they expect.
pub type Metadata = Arc<dyn Any + Send + Sync>;

/// InventoryItem value object representing one detected software package
///
/// Items are produced upstream by extractors and never mutated during
/// conversion. Each item carries a shared reference to the capability object
/// that knows how to derive its PURL, CPEs and ecosystem.
#[derive(Clone)]
pub struct InventoryItem {
    name: String,
    version: String,
    locations: Vec<String>,
    metadata: Option<Metadata>,
    capability: Arc<dyn Capability>,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        capability: Arc<dyn Capability>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            locations: Vec::new(),
            metadata: None,
            capability,
        }
    }

    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_metadata<M: Any + Send + Sync>(mut self, metadata: M) -> Self {
        self.metadata = Some(Arc::new(metadata));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Returns the metadata payload if it has the requested shape
    pub fn metadata_as<M: Any>(&self) -> Option<&M> {
        self.metadata.as_ref().and_then(|m| m.downcast_ref::<M>())
    }

    pub fn capability(&self) -> &dyn Capability {
        self.capability.as_ref()
    }
}

impl fmt::Debug for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryItem")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("locations", &self.locations)
            .field("has_metadata", &self.metadata.is_some())
            .field("capability", &self.capability.name())
            .finish()
    }
}

/// ScanResult holding the ordered inventory handed over by the scanner
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    items: Vec<InventoryItem>,
}

impl ScanResult {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<InventoryItem> for ScanResult {
    fn from_iter<I: IntoIterator<Item = InventoryItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::ecosystems::PythonPackageCapability;

    #[derive(Debug, PartialEq)]
    struct GroupMetadata {
        groups: Vec<String>,
    }

    fn python() -> Arc<dyn Capability> {
        Arc::new(PythonPackageCapability::new())
    }

    #[test]
    fn test_inventory_item_accessors() {
        let item = InventoryItem::new("requests", "2.31.0", python())
            .with_locations(vec!["/app/Pipfile.lock".to_string()]);

        assert_eq!(item.name(), "requests");
        assert_eq!(item.version(), "2.31.0");
        assert_eq!(item.locations(), &["/app/Pipfile.lock".to_string()]);
        assert!(item.metadata().is_none());
        assert_eq!(item.capability().name(), "python/package");
    }

    #[test]
    fn test_metadata_as_matching_shape() {
        let item = InventoryItem::new("requests", "2.31.0", python()).with_metadata(GroupMetadata {
            groups: vec!["dev".to_string()],
        });

        let metadata = item.metadata_as::<GroupMetadata>().unwrap();
        assert_eq!(metadata.groups, vec!["dev".to_string()]);
    }

    #[test]
    fn test_metadata_as_wrong_shape() {
        let item = InventoryItem::new("requests", "2.31.0", python()).with_metadata(42_u32);
        assert!(item.metadata_as::<GroupMetadata>().is_none());
    }

    #[test]
    fn test_debug_does_not_require_debug_metadata() {
        let item = InventoryItem::new("requests", "2.31.0", python()).with_metadata(42_u32);
        let debug = format!("{:?}", item);
        assert!(debug.contains("requests"));
        assert!(debug.contains("has_metadata: true"));
    }

    #[test]
    fn test_scan_result_from_iter() {
        let result: ScanResult = ["a", "b"]
            .iter()
            .map(|name| InventoryItem::new(*name, "1.0", python()))
            .collect();

        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.items()[1].name(), "b");
        assert!(ScanResult::default().is_empty());
    }
}
