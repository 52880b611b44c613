use crate::graph::ops::{displayed_edges, displayed_packages};
use crate::graph::DependencyGraph;

pub const INTERNAL_FILL: &str = "#f0f0f0";
pub const EXTERNAL_FILL: &str = "#ffe0e0";

pub fn render_mermaid(graph: &DependencyGraph) -> String {
    let mut out = String::from("graph TD\n");
    for edge in displayed_edges(graph) {
        out.push_str(&format!(
            "    \"{}\" --> \"{}\"\n",
            escape_mermaid_label(edge.from.label()),
            escape_mermaid_label(edge.to.label())
        ));
    }
    out
}

pub fn render_dot(graph: &DependencyGraph) -> String {
    let mut out = String::from("digraph PluginDependencies {\n");
    out.push_str("    rankdir=TB;\n");
    out.push_str("    node [shape=box, style=rounded];\n");
    out.push_str("    edge [color=\"#666666\"];\n");

    for package in displayed_packages(graph) {
        let fill = if package.is_external {
            EXTERNAL_FILL
        } else {
            INTERNAL_FILL
        };
        out.push_str(&format!(
            "    \"{}\" [label=\"{}\", fillcolor=\"{}\", style=\"rounded,filled\"];\n",
            escape_dot_label(&package.name),
            escape_dot_label(package.label()),
            fill
        ));
    }

    for edge in displayed_edges(graph) {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape_dot_label(&edge.from.name),
            escape_dot_label(&edge.to.name)
        ));
    }

    out.push_str("}\n");
    out
}

fn escape_dot_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_mermaid_label(label: &str) -> String {
    label.replace('"', "#quot;")
}
