//! sbom-converter - SBOM synthesis for scanner inventories
//!
//! This library converts the inventory produced by a filesystem/OS scanner
//! into SPDX 2.3 documents and CycloneDX BOMs, and resolves standalone
//! Package URLs and CPEs for single items. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Document models, identifier synthesis,
//!   PURL/CPE resolution
//! - **Application Layer** (`application`): Conversion use cases and configuration DTOs
//! - **Ports** (`ports`): The capability interface ecosystem plugins implement
//! - **Adapters** (`adapters`): Reference ecosystem capabilities and a Pipfile.lock extractor
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_converter::prelude::*;
//! use std::io::Cursor;
//!
//! # fn main() -> Result<()> {
//! let lockfile = r#"{"default": {"requests": {"version": "==2.31.0"}}}"#;
//! let items = PipfileLockExtractor::new().extract("Pipfile.lock", Cursor::new(lockfile))?;
//! let scan = ScanResult::new(items);
//!
//! let mut ids = IdentifierSynthesizer::from_entropy()?;
//! let spdx = to_spdx23(&scan, &SpdxConfig::default(), &mut ids)?;
//! let bom = to_cyclonedx(&scan, &CdxConfig::default(), &mut ids)?;
//!
//! println!("{} packages, {} components", spdx.packages.len(), bom.components.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::ecosystems::{
        PythonPackageCapability, SpdxSbomCapability, SpdxSbomMetadata, WindowsPatchCapability,
        WindowsPatchMetadata,
    };
    pub use crate::adapters::outbound::lockfiles::{DepGroupMetadata, PipfileLockExtractor};
    pub use crate::application::converter::{
        to_cpes, to_cyclonedx, to_ecosystem, to_purl, to_spdx23,
    };
    pub use crate::application::dto::{CdxConfig, SpdxConfig};
    pub use crate::application::use_cases::{ConvertToCycloneDxUseCase, ConvertToSpdxUseCase};
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::ports::outbound::Capability;
    pub use crate::sbom_generation::domain::{
        purl_type, Creator, CreatorType, CycloneDxBom, InventoryItem, PackageUrl, PurlError,
        ScanResult, SpdxDocument, NO_ASSERTION,
    };
    pub use crate::sbom_generation::services::{
        CpeResolver, IdentifierSanitizer, IdentifierSource, IdentifierSynthesizer, PurlResolver,
        SharedIdentifierSynthesizer,
    };
    pub use crate::shared::{ConversionError, Result};
}
