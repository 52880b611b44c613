use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::core::Package;
use crate::error::{PlugdepsError, Result};
use crate::graph::DependencyGraph;
use crate::manifest::{load_manifest, Manifest, ManifestError};

/// A candidate folder that was skipped or otherwise needed attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub folder: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ScanOutcome {
    pub graph: DependencyGraph,
    pub warnings: Vec<ScanWarning>,
}

pub fn build_graph(root: &Path, show_external: bool) -> Result<ScanOutcome> {
    let mut graph = DependencyGraph::new(show_external);
    let mut warnings = Vec::new();

    let manifests = discover_packages(root, &mut graph, &mut warnings)?;
    link_dependencies(&mut graph, &manifests);

    Ok(ScanOutcome { graph, warnings })
}

fn candidate_folders(root: &Path) -> Result<Vec<String>> {
    let root_error = |source| PlugdepsError::RootDir {
        path: root.to_path_buf(),
        source,
    };

    let mut folders = Vec::new();
    for entry in std::fs::read_dir(root).map_err(root_error)? {
        let entry = entry.map_err(root_error)?;
        if !entry.path().is_dir() {
            continue;
        }
        folders.push(entry.file_name().to_string_lossy().to_string());
    }
    folders.sort();
    Ok(folders)
}

fn discover_packages(
    root: &Path,
    graph: &mut DependencyGraph,
    warnings: &mut Vec<ScanWarning>,
) -> Result<HashMap<String, Manifest>> {
    let mut manifests = HashMap::new();

    for folder in candidate_folders(root)? {
        let path = root.join(&folder);
        let manifest = match load_manifest(&path) {
            Ok(manifest) => manifest,
            Err(err) => {
                warnings.push(skipped_folder(&folder, &err));
                continue;
            }
        };

        let package = Package::internal(manifest.name.clone(), folder.clone(), path.clone());
        if let Some(previous) = graph.packages.insert(manifest.name.clone(), package) {
            let previous_path = previous
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or(previous.folder_name);
            warnings.push(ScanWarning {
                folder: folder.clone(),
                message: format!(
                    "package {} is declared in both {} and {}; using {}",
                    manifest.name,
                    previous_path,
                    path.display(),
                    folder
                ),
            });
        }
        manifests.insert(manifest.name.clone(), manifest);
    }

    Ok(manifests)
}

fn skipped_folder(folder: &str, err: &ManifestError) -> ScanWarning {
    let message = match err {
        ManifestError::NotFound(_) => format!("no composer.json found in {folder}"),
        other => format!("skipping {folder}: {other}"),
    };
    ScanWarning {
        folder: folder.to_string(),
        message,
    }
}

fn link_dependencies(graph: &mut DependencyGraph, manifests: &HashMap<String, Manifest>) {
    let internal: HashSet<String> = graph.packages.keys().cloned().collect();
    let mut names: Vec<&String> = internal.iter().collect();
    names.sort();

    for name in names {
        let Some(manifest) = manifests.get(name) else {
            continue;
        };

        let mut dependencies = Vec::new();
        for dep in manifest.package_requirements() {
            if internal.contains(dep) {
                dependencies.push(dep.to_string());
                continue;
            }

            *graph.external_usage.entry(dep.to_string()).or_insert(0) += 1;
            if graph.show_external {
                dependencies.push(dep.to_string());
                graph
                    .packages
                    .entry(dep.to_string())
                    .or_insert_with(|| Package::external(dep));
            }
        }

        if let Some(package) = graph.packages.get_mut(name) {
            package.dependencies = dependencies;
        }
    }
}
