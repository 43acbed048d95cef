//! Entry points for callers that just want a document or an identifier
//!
//! These wrap the use cases and resolver services so that a single item's
//! PURL or CPEs can be queried without assembling a whole document.

use crate::application::dto::{CdxConfig, SpdxConfig};
use crate::application::use_cases::{ConvertToCycloneDxUseCase, ConvertToSpdxUseCase};
use crate::sbom_generation::domain::{
    CycloneDxBom, InventoryItem, PackageUrl, ScanResult, SpdxDocument,
};
use crate::sbom_generation::services::{CpeResolver, IdentifierSource, PurlResolver};
use crate::shared::ConversionError;

/// Converts a scan result into an SPDX 2.3 document
pub fn to_spdx23<S: IdentifierSource>(
    scan: &ScanResult,
    config: &SpdxConfig,
    ids: S,
) -> Result<SpdxDocument, ConversionError> {
    ConvertToSpdxUseCase::new(config.clone(), ids).execute(scan)
}

/// Converts a scan result into a CycloneDX BOM
pub fn to_cyclonedx<S: IdentifierSource>(
    scan: &ScanResult,
    config: &CdxConfig,
    ids: S,
) -> Result<CycloneDxBom, ConversionError> {
    ConvertToCycloneDxUseCase::new(config.clone(), ids).execute(scan)
}

/// Resolves the canonical Package URL of a single item
pub fn to_purl(item: &InventoryItem) -> Result<PackageUrl, ConversionError> {
    PurlResolver::resolve(item)
}

/// Resolves the CPEs of a single item; empty when none are known
pub fn to_cpes(item: &InventoryItem) -> Vec<String> {
    CpeResolver::resolve(item)
}

/// Resolves the OSV ecosystem of a single item
pub fn to_ecosystem(item: &InventoryItem) -> Result<String, ConversionError> {
    PurlResolver::ecosystem(item)
}
