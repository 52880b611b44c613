use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{PlugdepsError, Result};
use crate::graph::viz::{render_dot, render_mermaid};
use crate::graph::DependencyGraph;

pub mod graphviz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Mermaid,
    Svg,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Mermaid => f.write_str("Mermaid graph"),
            OutputKind::Svg => f.write_str("SVG graph"),
        }
    }
}

/// Outcome of one requested output. A failed step never stops the others.
#[derive(Debug)]
pub struct OutputReport {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub result: Result<()>,
}

pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| PlugdepsError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn write_mermaid(graph: &DependencyGraph, path: &Path) -> Result<()> {
    fs::write(path, render_mermaid(graph))?;
    Ok(())
}

pub fn write_svg(graph: &DependencyGraph, path: &Path, program: &str) -> Result<()> {
    graphviz::render_svg(&render_dot(graph), path, program)?;
    Ok(())
}

pub fn write_outputs(graph: &DependencyGraph, settings: &Settings) -> Vec<OutputReport> {
    let mut reports = Vec::new();

    if settings.format.includes_mermaid() {
        let path = settings.mermaid_path();
        let result = write_mermaid(graph, &path);
        reports.push(OutputReport {
            kind: OutputKind::Mermaid,
            path,
            result,
        });
    }

    if settings.format.includes_graphviz() {
        let path = settings.svg_path();
        let result = write_svg(graph, &path, &settings.dot_program);
        reports.push(OutputReport {
            kind: OutputKind::Svg,
            path,
            result,
        });
    }

    reports
}
