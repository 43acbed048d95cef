//! Configuration file support for sbom-converter.
//!
//! Provides YAML-based configuration through `sbom-converter.config.yml`
//! files carrying the SPDX and CycloneDX conversion settings.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::application::dto::{CdxConfig, SpdxConfig};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "sbom-converter.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub spdx: Option<SpdxConfig>,
    pub cyclonedx: Option<CdxConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// SPDX settings, defaulted when the section is absent
    pub fn spdx_config(&self) -> SpdxConfig {
        self.spdx.clone().unwrap_or_default()
    }

    /// CycloneDX settings, defaulted when the section is absent
    pub fn cdx_config(&self) -> CdxConfig {
        self.cyclonedx.clone().unwrap_or_default()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config = parse_config(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn parse_config(content: &str) -> Result<ConfigFile> {
    // An empty document deserializes to unit, not a map
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref spdx) = config.spdx {
        for (i, creator) in spdx.creators.iter().enumerate() {
            if creator.name.trim().is_empty() {
                bail!(
                    "Invalid config: spdx.creators[{}].name must not be empty.\n\n\
                     💡 Hint: Each creator needs a 'type' (Person, Organization or Tool) and a non-empty 'name'.",
                    i
                );
            }
        }
    }
    if let Some(ref cyclonedx) = config.cyclonedx {
        for (i, author) in cyclonedx.authors.iter().enumerate() {
            if author.trim().is_empty() {
                bail!(
                    "Invalid config: cyclonedx.authors[{}] must not be empty.\n\n\
                     💡 Hint: Remove the blank entry or fill in the author's name.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field will be ignored");
    }
}
