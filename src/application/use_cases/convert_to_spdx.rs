use crate::application::dto::SpdxConfig;
use crate::application::use_cases::TOOL_NAME;
use crate::sbom_generation::domain::spdx_document::{
    CreationInfo, ElementRef, ExternalReference, Relationship, SpdxPackage, Supplier,
    DATA_LICENSE, DOCUMENT_IDENTIFIER, SPDX_VERSION,
};
use crate::sbom_generation::domain::{
    Creator, CreatorType, InventoryItem, PackageUrl, ScanResult, SpdxDocument, NO_ASSERTION,
};
use crate::sbom_generation::services::{
    creation_timestamp, IdentifierSanitizer, IdentifierSource, PurlResolver,
};
use crate::shared::ConversionError;
use tracing::warn;

const DEFAULT_DOCUMENT_NAME: &str = "SCALIBR-generated SPDX";
const NAMESPACE_DOMAIN: &str = "spdx.google";
const PACKAGE_ID_PREFIX: &str = "SPDXRef-Package-";
const ROOT_PACKAGE_NAME: &str = "main";
const ROOT_PACKAGE_VERSION: &str = "0";

/// ConvertToSpdxUseCase - Builds an SPDX 2.3 document from a scan result
///
/// The root package "main" contains every item with a resolvable PURL, and
/// every item in turn contains a NOASSERTION marker since nothing deeper is
/// known. Items whose PURL cannot be resolved are left out entirely.
///
/// Identifiers are drawn from the injected source in this order: root
/// package, then one per converted item, then the namespace (only when the
/// config does not override it).
///
/// # Type Parameters
/// * `S` - IdentifierSource implementation
pub struct ConvertToSpdxUseCase<S> {
    config: SpdxConfig,
    ids: S,
}

impl<S: IdentifierSource> ConvertToSpdxUseCase<S> {
    pub fn new(config: SpdxConfig, ids: S) -> Self {
        Self { config, ids }
    }

    /// Executes the conversion
    ///
    /// # Errors
    /// Returns `FatalInitialization` if the identifier source fails; no
    /// partial document is returned
    pub fn execute(&mut self, scan: &ScanResult) -> Result<SpdxDocument, ConversionError> {
        let root = self.build_root_package()?;
        let root_id = root.spdx_identifier.clone();

        let mut packages = vec![root];
        let mut relationships = Vec::new();

        for item in scan.items() {
            let purl = match PurlResolver::resolve(item) {
                Ok(purl) => purl,
                Err(e) if e.is_recoverable() => {
                    warn!(
                        item = item.name(),
                        error = %e,
                        "Skipping inventory item without a resolvable package URL"
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            let package = self.build_package(item, &purl)?;
            relationships.push(Relationship::contains(
                root_id.clone(),
                ElementRef::Element(package.spdx_identifier.clone()),
            ));
            relationships.push(Relationship::contains(
                package.spdx_identifier.clone(),
                ElementRef::NoAssertion,
            ));
            packages.push(package);
        }

        let document_namespace = match self.config.document_namespace() {
            Some(namespace) => namespace.to_string(),
            None => format!("https://{}/{}", NAMESPACE_DOMAIN, self.ids.next_uuid()?),
        };

        Ok(SpdxDocument {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_identifier: DOCUMENT_IDENTIFIER.to_string(),
            document_name: self
                .config
                .document_name()
                .unwrap_or(DEFAULT_DOCUMENT_NAME)
                .to_string(),
            document_namespace,
            creation_info: self.build_creation_info(),
            packages,
            relationships,
        })
    }

    fn package_identifier(&mut self, name: &str) -> Result<String, ConversionError> {
        Ok(format!(
            "{}{}-{}",
            PACKAGE_ID_PREFIX,
            IdentifierSanitizer::sanitize(name),
            self.ids.next_uuid()?
        ))
    }

    fn build_root_package(&mut self) -> Result<SpdxPackage, ConversionError> {
        Ok(SpdxPackage {
            name: ROOT_PACKAGE_NAME.to_string(),
            spdx_identifier: self.package_identifier(ROOT_PACKAGE_NAME)?,
            version: ROOT_PACKAGE_VERSION.to_string(),
            supplier: None,
            download_location: NO_ASSERTION.to_string(),
            files_analyzed: false,
            external_references: Vec::new(),
        })
    }

    fn build_package(
        &mut self,
        item: &InventoryItem,
        purl: &PackageUrl,
    ) -> Result<SpdxPackage, ConversionError> {
        Ok(SpdxPackage {
            name: item.name().to_string(),
            spdx_identifier: self.package_identifier(item.name())?,
            version: item.version().to_string(),
            supplier: Some(Supplier::no_assertion()),
            download_location: NO_ASSERTION.to_string(),
            files_analyzed: false,
            external_references: vec![ExternalReference::purl(purl.to_string())],
        })
    }

    fn build_creation_info(&self) -> CreationInfo {
        let mut creators = vec![Creator::new(CreatorType::Tool, TOOL_NAME)];
        creators.extend(self.config.creators.iter().cloned());

        CreationInfo {
            creators,
            created: creation_timestamp(),
        }
    }
}
