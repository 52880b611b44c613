use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod composer;
pub mod traits;

use traits::ManifestFormat;

/// The namespace separator that marks a requirement key as a package
/// reference (`vendor/name`) rather than a platform constraint (`php`).
pub const NAMESPACE_SEPARATOR: char = '/';

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no manifest found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("manifest {0} does not declare a package name")]
    MissingName(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    /// Requirement name to raw constraint. Constraints are never interpreted.
    pub require: BTreeMap<String, String>,
}

impl Manifest {
    /// Requirement keys in the `vendor/name` form, in key order.
    pub fn package_requirements(&self) -> impl Iterator<Item = &str> {
        self.require
            .keys()
            .map(String::as_str)
            .filter(|dep| is_package_reference(dep))
    }
}

pub fn is_package_reference(requirement: &str) -> bool {
    requirement.contains(NAMESPACE_SEPARATOR)
}

pub fn default_format() -> Box<dyn ManifestFormat> {
    Box::new(composer::ComposerManifest)
}

pub fn load_manifest(dir: &Path) -> Result<Manifest, ManifestError> {
    load_manifest_with(default_format().as_ref(), dir)
}

pub fn load_manifest_with(
    format: &dyn ManifestFormat,
    dir: &Path,
) -> Result<Manifest, ManifestError> {
    let path = dir.join(format.file_name());
    if !path.is_file() {
        return Err(ManifestError::NotFound(path));
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;
    format.parse(&path, &content)
}
