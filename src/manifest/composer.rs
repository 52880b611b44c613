use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::manifest::traits::ManifestFormat;
use crate::manifest::{Manifest, ManifestError};

pub struct ComposerManifest;

#[derive(Debug, Deserialize)]
struct ComposerDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    require: Option<BTreeMap<String, serde_json::Value>>,
}

impl ComposerManifest {
    fn constraint_text(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl ManifestFormat for ComposerManifest {
    fn file_name(&self) -> &'static str {
        "composer.json"
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Manifest, ManifestError> {
        let document: ComposerDocument =
            serde_json::from_str(content).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let name = document
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ManifestError::MissingName(path.to_path_buf()))?;

        let require = document
            .require
            .unwrap_or_default()
            .iter()
            .map(|(dep, value)| (dep.clone(), Self::constraint_text(value)))
            .collect();

        Ok(Manifest { name, require })
    }
}
