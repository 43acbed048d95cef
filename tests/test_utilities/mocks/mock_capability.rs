use sbom_converter::prelude::*;
use std::result::Result as StdResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock Capability deriving a PyPI PURL from the item's name and version
#[derive(Default)]
pub struct MockCapability {
    cpes: Vec<String>,
    fail_cpes: bool,
    target_os: Option<&'static str>,
    untyped: bool,
    purl_calls: AtomicUsize,
}

impl MockCapability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpes(cpes: Vec<String>) -> Self {
        Self {
            cpes,
            ..Self::default()
        }
    }

    pub fn with_failing_cpes() -> Self {
        Self {
            fail_cpes: true,
            ..Self::default()
        }
    }

    /// Items only valid on an OS no test machine runs
    pub fn foreign_platform() -> Self {
        Self {
            target_os: Some("plan9"),
            ..Self::default()
        }
    }

    /// Items whose PURL carries no ecosystem type
    pub fn untyped() -> Self {
        Self {
            untyped: true,
            ..Self::default()
        }
    }

    pub fn purl_calls(&self) -> usize {
        self.purl_calls.load(Ordering::SeqCst)
    }

    pub fn item(self: &Arc<Self>, name: &str, version: &str) -> InventoryItem {
        InventoryItem::new(name, version, Arc::clone(self) as Arc<dyn Capability>)
            .with_locations(vec![format!("/fake/{}", name)])
    }
}

impl Capability for MockCapability {
    fn name(&self) -> &str {
        "mock/capability"
    }

    fn to_purl(&self, item: &InventoryItem) -> StdResult<Option<PackageUrl>, ConversionError> {
        self.purl_calls.fetch_add(1, Ordering::SeqCst);
        let ty = if self.untyped { "" } else { purl_type::PYPI };
        PackageUrl::new(ty, item.name(), item.version())
            .map(Some)
            .map_err(|e| e.into_incomplete(item.name()))
    }

    fn to_cpes(&self, _item: &InventoryItem) -> StdResult<Vec<String>, ConversionError> {
        if self.fail_cpes {
            return Err(ConversionError::UnsupportedMetadata {
                capability: self.name().to_string(),
                expected: "mock metadata".to_string(),
            });
        }
        Ok(self.cpes.clone())
    }

    fn ecosystem(&self, _item: &InventoryItem) -> StdResult<String, ConversionError> {
        Ok("PyPI".to_string())
    }

    fn target_os(&self) -> Option<&'static str> {
        self.target_os
    }
}
