use serde::Serialize;

use crate::graph::ops::{dependencies_of, internal_packages_with_dependencies};
use crate::graph::DependencyGraph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDependency {
    pub label: String,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPackage {
    pub label: String,
    pub name: String,
    pub dependencies: Vec<SummaryDependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalUsage {
    pub name: String,
    pub used_by: usize,
}

/// Read-only breakdown of a finished graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub packages: Vec<SummaryPackage>,
    pub external: Vec<ExternalUsage>,
}

impl Summary {
    pub fn from_graph(graph: &DependencyGraph) -> Self {
        let packages = internal_packages_with_dependencies(graph)
            .into_iter()
            .map(|package| SummaryPackage {
                label: package.label().to_string(),
                name: package.name.clone(),
                dependencies: dependencies_of(graph, package)
                    .into_iter()
                    .map(|dep| SummaryDependency {
                        label: dep.label().to_string(),
                        external: dep.is_external,
                    })
                    .collect(),
            })
            .collect();

        let external = graph
            .external_usage
            .iter()
            .map(|(name, count)| ExternalUsage {
                name: name.clone(),
                used_by: *count,
            })
            .collect();

        Self { packages, external }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::from("Internal Dependencies Summary:\n");
        for package in &self.packages {
            out.push_str(&format!("\n{}:\n", package.label));
            for dep in &package.dependencies {
                if dep.external {
                    out.push_str(&format!("  ├─ {} (external)\n", dep.label));
                } else {
                    out.push_str(&format!("  ├─ {}\n", dep.label));
                }
            }
        }

        if !self.external.is_empty() {
            out.push_str("\nExternal Dependencies Summary:\n");
            for usage in &self.external {
                out.push_str(&format!(
                    "  {}: used by {} plugin(s)\n",
                    usage.name, usage.used_by
                ));
            }
        }
        out
    }
}
