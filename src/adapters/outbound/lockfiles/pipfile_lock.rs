use crate::adapters::outbound::ecosystems::PythonPackageCapability;
use crate::ports::outbound::Capability;
use crate::sbom_generation::domain::InventoryItem;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

const PIPFILE_LOCK: &str = "Pipfile.lock";
const DEV_GROUP: &str = "dev";

#[derive(Debug, Deserialize)]
struct PipenvPackage {
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PipenvLock {
    #[serde(default)]
    default: BTreeMap<String, PipenvPackage>,
    #[serde(default)]
    develop: BTreeMap<String, PipenvPackage>,
}

/// Dependency groups a lockfile entry belongs to. Empty means the default group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepGroupMetadata {
    pub groups: Vec<String>,
}

/// PipfileLockExtractor turning Pipfile.lock documents into PyPI inventory
///
/// Packages in `default` are listed first, then `develop` packages that are
/// not already present. Within each section entries are ordered by name.
/// Entries without a pinned version (VCS or path dependencies) are skipped.
pub struct PipfileLockExtractor {
    capability: Arc<dyn Capability>,
}

impl PipfileLockExtractor {
    pub fn new() -> Self {
        Self {
            capability: Arc::new(PythonPackageCapability::new()),
        }
    }

    /// Returns true if the path names a Pipfile.lock
    pub fn file_required(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == PIPFILE_LOCK)
    }

    /// Parses a Pipfile.lock read from `reader`
    ///
    /// # Arguments
    /// * `path` - Location recorded on every extracted item
    /// * `reader` - Lockfile contents
    ///
    /// # Errors
    /// Returns an error if the contents are not a valid Pipfile.lock JSON document
    pub fn extract<R: Read>(&self, path: &str, reader: R) -> Result<Vec<InventoryItem>> {
        let lockfile: PipenvLock = serde_json::from_reader(reader).with_context(|| {
            format!(
                "Failed to parse {}: {}\n\n💡 Hint: Please verify that the file is valid JSON produced by pipenv",
                PIPFILE_LOCK, path
            )
        })?;

        let mut seen = HashSet::new();
        let mut items = Vec::new();
        self.add_packages(&mut items, &mut seen, &lockfile.default, None, path);
        self.add_packages(&mut items, &mut seen, &lockfile.develop, Some(DEV_GROUP), path);

        Ok(items)
    }

    fn add_packages(
        &self,
        items: &mut Vec<InventoryItem>,
        seen: &mut HashSet<(String, String)>,
        packages: &BTreeMap<String, PipenvPackage>,
        group: Option<&str>,
        path: &str,
    ) {
        for (name, package) in packages {
            let Some(version) = package
                .version
                .as_deref()
                .map(pinned_version)
                .filter(|v| !v.is_empty())
            else {
                continue;
            };

            if !seen.insert((name.clone(), version.to_string())) {
                continue;
            }

            let item = InventoryItem::new(name.clone(), version, Arc::clone(&self.capability))
                .with_locations(vec![path.to_string()])
                .with_metadata(DepGroupMetadata {
                    groups: group.map(|g| vec![g.to_string()]).unwrap_or_default(),
                });
            items.push(item);
        }
    }
}

impl Default for PipfileLockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips the `==` (or `===`) pin operator pipenv writes in front of versions.
/// Anything without that prefix is kept verbatim.
fn pinned_version(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix("===")
        .or_else(|| raw.strip_prefix("=="))
        .unwrap_or(raw)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKFILE: &str = r#"{
        "_meta": { "hash": { "sha256": "abc" }, "pipfile-spec": 6 },
        "default": {
            "requests": { "hashes": [], "version": "==2.31.0" },
            "certifi": { "version": "==2023.7.22" },
            "local-pkg": { "path": "./local" }
        },
        "develop": {
            "pytest": { "version": "==7.4.0" },
            "requests": { "version": "==2.31.0" },
            "certifi": { "version": "==2022.1.1" }
        }
    }"#;

    fn extract(content: &str) -> Vec<InventoryItem> {
        PipfileLockExtractor::new()
            .extract("/app/Pipfile.lock", content.as_bytes())
            .unwrap()
    }

    fn groups(item: &InventoryItem) -> Vec<String> {
        item.metadata_as::<DepGroupMetadata>().unwrap().groups.clone()
    }

    #[test]
    fn test_file_required() {
        assert!(PipfileLockExtractor::file_required(Path::new("/app/Pipfile.lock")));
        assert!(!PipfileLockExtractor::file_required(Path::new("/app/Pipfile")));
        assert!(!PipfileLockExtractor::file_required(Path::new("/app/poetry.lock")));
    }

    #[test]
    fn test_extract_strips_pin_operator() {
        let items = extract(LOCKFILE);
        let requests = items.iter().find(|i| i.name() == "requests").unwrap();
        assert_eq!(requests.version(), "2.31.0");
    }

    #[test]
    fn test_extract_order_and_groups() {
        let items = extract(LOCKFILE);
        let summary: Vec<(&str, &str)> = items.iter().map(|i| (i.name(), i.version())).collect();

        assert_eq!(
            summary,
            vec![
                ("certifi", "2023.7.22"),
                ("requests", "2.31.0"),
                ("certifi", "2022.1.1"),
                ("pytest", "7.4.0"),
            ]
        );
        assert!(groups(&items[1]).is_empty());
        assert_eq!(groups(&items[3]), vec!["dev".to_string()]);
    }

    #[test]
    fn test_extract_prod_wins_over_dev() {
        let items = extract(LOCKFILE);
        let requests: Vec<_> = items.iter().filter(|i| i.name() == "requests").collect();
        assert_eq!(requests.len(), 1);
        assert!(groups(requests[0]).is_empty());
    }

    #[test]
    fn test_extract_skips_unpinned_entries() {
        let items = extract(LOCKFILE);
        assert!(items.iter().all(|i| i.name() != "local-pkg"));
    }

    #[test]
    fn test_extract_records_location() {
        let items = extract(LOCKFILE);
        assert!(items
            .iter()
            .all(|i| i.locations() == ["/app/Pipfile.lock".to_string()]));
    }

    #[test]
    fn test_extract_invalid_json() {
        let result =
            PipfileLockExtractor::new().extract("/app/Pipfile.lock", "{ not json".as_bytes());
        let error = result.unwrap_err().to_string();
        assert!(error.contains("Failed to parse Pipfile.lock"));
        assert!(error.contains("/app/Pipfile.lock"));
    }

    #[test]
    fn test_extract_empty_sections() {
        assert!(extract("{}").is_empty());
    }

    #[test]
    fn test_pinned_version() {
        assert_eq!(pinned_version("==1.2.3"), "1.2.3");
        assert_eq!(pinned_version("===1.0-local"), "1.0-local");
        assert_eq!(pinned_version("1.2.3"), "1.2.3");
        assert_eq!(pinned_version(">=1.0"), ">=1.0");
        assert_eq!(pinned_version("=="), "");
    }
}
