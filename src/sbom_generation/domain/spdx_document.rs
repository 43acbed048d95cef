//! SPDX 2.3 document model
//!
//! In-memory representation of an SPDX 2.3 document. Encoding to tag-value,
//! JSON or RDF is left to downstream consumers.

use serde::Deserialize;
use std::fmt;

/// SPDX convention meaning "no claim is made" for a field
pub const NO_ASSERTION: &str = "NOASSERTION";

pub const SPDX_VERSION: &str = "SPDX-2.3";
pub const DATA_LICENSE: &str = "CC0-1.0";
pub const DOCUMENT_IDENTIFIER: &str = "DOCUMENT";

/// Kind of entity that created a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CreatorType {
    Person,
    Organization,
    Tool,
}

impl fmt::Display for CreatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatorType::Person => write!(f, "Person"),
            CreatorType::Organization => write!(f, "Organization"),
            CreatorType::Tool => write!(f, "Tool"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Creator {
    #[serde(rename = "type")]
    pub creator_type: CreatorType,
    pub name: String,
}

impl Creator {
    pub fn new(creator_type: CreatorType, name: impl Into<String>) -> Self {
        Self {
            creator_type,
            name: name.into(),
        }
    }
}

impl fmt::Display for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.creator_type, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationInfo {
    pub creators: Vec<Creator>,
    /// RFC 3339 UTC timestamp, second precision
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub supplier: String,
    pub supplier_type: String,
}

impl Supplier {
    pub fn no_assertion() -> Self {
        Self {
            supplier: NO_ASSERTION.to_string(),
            supplier_type: NO_ASSERTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub category: String,
    pub ref_type: String,
    pub locator: String,
}

impl ExternalReference {
    /// Package-manager reference pointing at a canonical PURL
    pub fn purl(locator: impl Into<String>) -> Self {
        Self {
            category: "PACKAGE-MANAGER".to_string(),
            ref_type: "purl".to_string(),
            locator: locator.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdxPackage {
    pub name: String,
    pub spdx_identifier: String,
    pub version: String,
    pub supplier: Option<Supplier>,
    pub download_location: String,
    pub files_analyzed: bool,
    pub external_references: Vec<ExternalReference>,
}

/// Target of a relationship: another element, or the special NOASSERTION marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRef {
    Element(String),
    NoAssertion,
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Element(id) => write!(f, "{}", id),
            ElementRef::NoAssertion => write!(f, "{}", NO_ASSERTION),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipType {
    Contains,
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipType::Contains => write!(f, "CONTAINS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub ref_a: String,
    pub ref_b: ElementRef,
    pub relationship: RelationshipType,
}

impl Relationship {
    pub fn contains(ref_a: impl Into<String>, ref_b: ElementRef) -> Self {
        Self {
            ref_a: ref_a.into(),
            ref_b,
            relationship: RelationshipType::Contains,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdxDocument {
    pub spdx_version: String,
    pub data_license: String,
    pub spdx_identifier: String,
    pub document_name: String,
    pub document_namespace: String,
    pub creation_info: CreationInfo,
    pub packages: Vec<SpdxPackage>,
    pub relationships: Vec<Relationship>,
}

impl SpdxDocument {
    /// The root package every converted item hangs off
    pub fn root_package(&self) -> Option<&SpdxPackage> {
        self.packages.first()
    }

    pub fn package(&self, spdx_identifier: &str) -> Option<&SpdxPackage> {
        self.packages
            .iter()
            .find(|p| p.spdx_identifier == spdx_identifier)
    }

    /// Relationships whose source is the given element
    pub fn relationships_from<'a>(
        &'a self,
        spdx_identifier: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.ref_a == spdx_identifier)
    }
}
