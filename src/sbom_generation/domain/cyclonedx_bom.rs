//! CycloneDX BOM model
//!
//! Flat component list plus root metadata. XML/JSON encoding is left to
//! downstream consumers.

use std::fmt;

pub const BOM_FORMAT: &str = "CycloneDX";
pub const SPEC_VERSION: &str = "1.5";
pub const JSON_SCHEMA: &str = "http://cyclonedx.org/schema/bom-1.5.schema.json";
pub const XML_NAMESPACE: &str = "http://cyclonedx.org/schema/bom/1.5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Application,
    Library,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Application => write!(f, "application"),
            ComponentType::Library => write!(f, "library"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalReferenceType {
    Website,
}

impl fmt::Display for ExternalReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalReferenceType::Website => write!(f, "website"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub url: String,
    pub reference_type: ExternalReferenceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Component {
    pub bom_ref: Option<String>,
    pub component_type: Option<ComponentType>,
    pub name: String,
    pub version: String,
    pub purl: Option<String>,
    pub external_references: Vec<ExternalReference>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationalContact {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// RFC 3339 UTC timestamp, second precision
    pub timestamp: String,
    pub component: Component,
    pub authors: Vec<OrganizationalContact>,
    pub tools: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycloneDxBom {
    pub bom_format: String,
    pub spec_version: String,
    pub version: u32,
    pub json_schema: String,
    pub xml_namespace: String,
    pub metadata: Metadata,
    pub components: Vec<Component>,
}

impl CycloneDxBom {
    /// Creates a BOM with the format constants filled in
    pub fn new(metadata: Metadata, components: Vec<Component>) -> Self {
        Self {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            version: 1,
            json_schema: JSON_SCHEMA.to_string(),
            xml_namespace: XML_NAMESPACE.to_string(),
            metadata,
            components,
        }
    }
}
