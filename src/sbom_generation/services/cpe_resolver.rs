use crate::sbom_generation::domain::InventoryItem;
use tracing::debug;

/// CpeResolver service delegating CPE enrichment to the item's capability
///
/// CPEs are optional. Unsupported capabilities and unexpected metadata
/// shapes both resolve to an empty list.
pub struct CpeResolver;

impl CpeResolver {
    pub fn resolve(item: &InventoryItem) -> Vec<String> {
        match item.capability().to_cpes(item) {
            Ok(cpes) => cpes,
            Err(e) => {
                debug!(
                    item = item.name(),
                    capability = item.capability().name(),
                    error = %e,
                    "No CPEs resolved for inventory item"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::ecosystems::{
        PythonPackageCapability, SpdxSbomCapability, SpdxSbomMetadata,
    };
    use std::sync::Arc;

    #[test]
    fn test_resolve_cpes_from_sbom_metadata() {
        let item = InventoryItem::new("nginx", "", Arc::new(SpdxSbomCapability::new()))
            .with_metadata(SpdxSbomMetadata {
                purl: None,
                cpes: vec!["cpe:2.3:a:nginx:nginx:1.21.1".to_string()],
            });

        assert_eq!(
            CpeResolver::resolve(&item),
            vec!["cpe:2.3:a:nginx:nginx:1.21.1".to_string()]
        );
    }

    #[test]
    fn test_resolve_cpes_wrong_metadata_shape_is_empty() {
        let item = InventoryItem::new("nginx", "", Arc::new(SpdxSbomCapability::new()))
            .with_metadata(12_u8);

        assert!(CpeResolver::resolve(&item).is_empty());
    }

    #[test]
    fn test_resolve_cpes_unsupported_capability_is_empty() {
        let item = InventoryItem::new("software", "1.0", Arc::new(PythonPackageCapability::new()));
        assert!(CpeResolver::resolve(&item).is_empty());
    }
}
