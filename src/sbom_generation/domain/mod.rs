pub mod cyclonedx_bom;
pub mod inventory_item;
pub mod package_url;
pub mod spdx_document;

pub use cyclonedx_bom::CycloneDxBom;
pub use inventory_item::{InventoryItem, Metadata, ScanResult};
pub use package_url::{purl_type, PackageUrl, PurlError};
pub use spdx_document::{Creator, CreatorType, SpdxDocument, NO_ASSERTION};
