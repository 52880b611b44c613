use crate::core::Package;
use crate::graph::DependencyGraph;

#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    pub from: &'a Package,
    pub to: &'a Package,
}

/// External packages are only shown when the graph was built with them.
pub fn is_displayed(graph: &DependencyGraph, package: &Package) -> bool {
    !package.is_external || graph.show_external
}

/// All packages ordered by label, then by name.
pub fn sorted_packages(graph: &DependencyGraph) -> Vec<&Package> {
    let mut packages: Vec<&Package> = graph.packages.values().collect();
    packages.sort_by(|a, b| {
        a.folder_name
            .cmp(&b.folder_name)
            .then_with(|| a.name.cmp(&b.name))
    });
    packages
}

pub fn displayed_packages(graph: &DependencyGraph) -> Vec<&Package> {
    sorted_packages(graph)
        .into_iter()
        .filter(|package| is_displayed(graph, package))
        .collect()
}

pub fn dependencies_of<'a>(graph: &'a DependencyGraph, package: &'a Package) -> Vec<&'a Package> {
    package
        .dependencies
        .iter()
        .filter_map(|dep| graph.get(dep))
        .collect()
}

/// Edges whose endpoints both pass the display filter, grouped by source in
/// package order and in declaration order within a source.
pub fn displayed_edges(graph: &DependencyGraph) -> Vec<Edge<'_>> {
    let mut edges = Vec::new();
    for from in displayed_packages(graph) {
        for to in dependencies_of(graph, from) {
            if is_displayed(graph, to) {
                edges.push(Edge { from, to });
            }
        }
    }
    edges
}

pub fn internal_packages_with_dependencies(graph: &DependencyGraph) -> Vec<&Package> {
    sorted_packages(graph)
        .into_iter()
        .filter(|package| !package.is_external && !package.dependencies.is_empty())
        .collect()
}
