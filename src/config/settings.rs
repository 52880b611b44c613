use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_MERMAID_FILE: &str = "dependencies.mmd";
pub const DEFAULT_SVG_FILE: &str = "dependencies.svg";
pub const DEFAULT_DOT_PROGRAM: &str = "dot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Mermaid,
    Graphviz,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn includes_mermaid(self) -> bool {
        matches!(self, OutputFormat::Mermaid | OutputFormat::Both)
    }

    pub fn includes_graphviz(self) -> bool {
        matches!(self, OutputFormat::Graphviz | OutputFormat::Both)
    }
}

/// Contents of an optional `.plugdeps.toml`. Every field is optional so a
/// file can override just the pieces it cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub show_external: Option<bool>,
    #[serde(default)]
    pub mermaid_file: Option<String>,
    #[serde(default)]
    pub svg_file: Option<String>,
    #[serde(default)]
    pub dot_program: Option<String>,
}

/// Values taken from the command line (or their env fallbacks).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
    pub show_external: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub show_external: bool,
    pub mermaid_file: String,
    pub svg_file: String,
    pub dot_program: String,
}

impl Settings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: OutputFormat::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            show_external: false,
            mermaid_file: DEFAULT_MERMAID_FILE.to_string(),
            svg_file: DEFAULT_SVG_FILE.to_string(),
            dot_program: DEFAULT_DOT_PROGRAM.to_string(),
        }
    }

    pub fn mermaid_path(&self) -> PathBuf {
        self.output_dir.join(&self.mermaid_file)
    }

    pub fn svg_path(&self) -> PathBuf {
        self.output_dir.join(&self.svg_file)
    }
}
