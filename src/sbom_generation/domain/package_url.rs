//! Package URL value object
//!
//! Canonical form: `pkg:type/namespace/name@version?qualifiers#subpath`.
//! Namespace segments, name, version, qualifier values and subpath segments are
//! percent-encoded for every byte outside the unreserved set `[A-Za-z0-9-._~]`.
//!
//! Type validation, type-specific name normalization, qualifier key checks and
//! parsing are delegated to the `packageurl` crate.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::shared::ConversionError;

/// Well-known PURL types
pub mod purl_type {
    pub const CARGO: &str = "cargo";
    pub const GENERIC: &str = "generic";
    pub const GOLANG: &str = "golang";
    pub const MAVEN: &str = "maven";
    pub const NPM: &str = "npm";
    pub const PYPI: &str = "pypi";
}

const SCHEME: &str = "pkg:";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurlError {
    #[error("Invalid Package URL '{purl}': {reason}")]
    Parse { purl: String, reason: String },

    #[error("Invalid Package URL {component} '{value}': {reason}")]
    Component {
        component: &'static str,
        value: String,
        reason: String,
    },
}

impl PurlError {
    /// Reports the error against the inventory item whose PURL was being built
    pub fn into_incomplete(self, item_name: &str) -> ConversionError {
        ConversionError::IncompleteItem {
            name: item_name.to_string(),
            reason: self.to_string(),
        }
    }
}

/// PackageUrl value object identifying a package by ecosystem, name and version
#[derive(Debug, Clone)]
pub struct PackageUrl {
    inner: packageurl::PackageUrl<'static>,
}

impl PackageUrl {
    /// Creates a PURL. An empty version means "unversioned".
    ///
    /// # Errors
    /// Returns `PurlError::Component` if the type is not a valid PURL type
    pub fn new(
        purl_type: &str,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, PurlError> {
        let mut inner = packageurl::PackageUrl::new(purl_type.to_lowercase(), name.into())
            .map_err(|e| PurlError::Component {
                component: "type",
                value: purl_type.to_string(),
                reason: e.to_string(),
            })?;

        let version = version.into();
        if !version.is_empty() {
            inner.with_version(version);
        }
        Ok(Self { inner })
    }

    /// Sets the namespace. Empty segments are dropped here so the stored
    /// value is exactly what parsing the canonical string gives back; a
    /// namespace with no segments left is ignored.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        let namespace = namespace
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        if !namespace.is_empty() {
            self.inner.with_namespace(namespace);
        }
        self
    }

    /// Adds a qualifier. Qualifiers with empty values are dropped, as the
    /// canonical form never carries them.
    ///
    /// # Errors
    /// Returns `PurlError::Component` if the key is not a valid qualifier key
    pub fn with_qualifier(
        mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<Self, PurlError> {
        let value = value.into();
        if value.is_empty() {
            return Ok(self);
        }
        self.inner
            .add_qualifier(key.to_lowercase(), value)
            .map_err(|e| PurlError::Component {
                component: "qualifier key",
                value: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(self)
    }

    /// Sets the subpath. Empty segments are dropped.
    ///
    /// # Errors
    /// Returns `PurlError::Component` if a segment contains invalid characters
    pub fn with_subpath(mut self, subpath: &str) -> Result<Self, PurlError> {
        let subpath = subpath
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        if subpath.is_empty() {
            return Ok(self);
        }
        self.inner
            .with_subpath(subpath.clone())
            .map_err(|e| PurlError::Component {
                component: "subpath",
                value: subpath,
                reason: e.to_string(),
            })?;
        Ok(self)
    }

    pub fn purl_type(&self) -> &str {
        self.inner.ty()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.inner.namespace()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Version, or "" when unversioned
    pub fn version(&self) -> &str {
        self.inner.version().unwrap_or("")
    }

    /// Qualifiers in canonical (sorted key) order
    pub fn qualifiers(&self) -> BTreeMap<&str, &str> {
        self.inner
            .qualifiers()
            .iter()
            .map(|(key, value)| (&**key, &**value))
            .collect()
    }

    pub fn subpath(&self) -> Option<&str> {
        self.inner.subpath()
    }
}

impl PartialEq for PackageUrl {
    fn eq(&self, other: &Self) -> bool {
        self.purl_type() == other.purl_type()
            && self.namespace() == other.namespace()
            && self.name() == other.name()
            && self.version() == other.version()
            && self.qualifiers() == other.qualifiers()
            && self.subpath() == other.subpath()
    }
}

impl Eq for PackageUrl {}

fn encode_segments(value: &str) -> String {
    value
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/", SCHEME, self.purl_type())?;
        if let Some(namespace) = self.namespace() {
            write!(f, "{}/", encode_segments(namespace))?;
        }
        write!(f, "{}", urlencoding::encode(self.name()))?;
        if !self.version().is_empty() {
            write!(f, "@{}", urlencoding::encode(self.version()))?;
        }
        let qualifiers = self.qualifiers();
        if !qualifiers.is_empty() {
            let qualifiers = qualifiers
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            write!(f, "?{}", qualifiers)?;
        }
        if let Some(subpath) = self.subpath() {
            write!(f, "#{}", encode_segments(subpath))?;
        }
        Ok(())
    }
}

impl FromStr for PackageUrl {
    type Err = PurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason: String| PurlError::Parse {
            purl: s.to_string(),
            reason,
        };

        let inner =
            packageurl::PackageUrl::from_str(s).map_err(|e| parse_error(e.to_string()))?;
        if inner.ty().is_empty() {
            return Err(parse_error("no type".to_string()));
        }
        if inner.name().is_empty() {
            return Err(parse_error("no name".to_string()));
        }
        Ok(Self { inner })
    }
}
