use std::path::PathBuf;

use clap::Parser;

use crate::config::resolve::resolve_settings;
use crate::config::{OutputFormat, Overrides, Settings};
use crate::error::{PlugdepsError, Result};
use crate::graph::builder::build_graph;
use crate::render::graphviz::find_program;
use crate::render::{prepare_output_dir, write_outputs};
use crate::report::Summary;
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "plugdeps")]
#[command(about = "Plugin dependency graph generator", long_about = None)]
pub struct Cli {
    /// Directory containing plugin folders
    #[arg(short, long, env = "PLUGDEPS_DIR")]
    pub dir: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, env = "PLUGDEPS_FORMAT")]
    pub format: Option<OutputFormat>,
    /// Output directory for generated files
    #[arg(short, long, env = "PLUGDEPS_OUTPUT")]
    pub output: Option<PathBuf>,
    /// Include external dependencies in the graph (`--show-external=false` to turn off)
    #[arg(
        long,
        env = "PLUGDEPS_SHOW_EXTERNAL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub show_external: Option<bool>,
    /// Settings file (defaults to <dir>/.plugdeps.toml when present)
    #[arg(short, long, env = "PLUGDEPS_CONFIG")]
    pub config: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
    #[arg(short, long)]
    pub quiet: bool,
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            root: self.dir.clone(),
            config_path: self.config.clone(),
            format: self.format,
            output_dir: self.output.clone(),
            show_external: self.show_external,
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    output::configure(cli.quiet, cli.no_color);
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let settings = resolve_settings(cli.overrides())?;
    preflight(&settings)?;
    prepare_output_dir(&settings.output_dir)?;

    let outcome = build_graph(&settings.root, settings.show_external)?;
    for warning in &outcome.warnings {
        output::warn(&warning.message);
    }
    let graph = outcome.graph;
    output::info(&format!(
        "Scanned {} package(s) in {}",
        graph.len(),
        settings.root.display()
    ));

    for report in write_outputs(&graph, &settings) {
        match report.result {
            Ok(()) => output::saved(&format!(
                "{} saved to {}",
                report.kind,
                report.path.display()
            )),
            Err(err) => output::error(&format!("Failed to write {}: {}", report.kind, err)),
        }
    }

    let summary = Summary::from_graph(&graph);
    if cli.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|err| PlugdepsError::Other(anyhow::Error::new(err)))?;
        println!("{json}");
    } else {
        println!();
        print!("{}", summary.render_text());
    }

    Ok(())
}

/// Graphviz must be on `PATH` before anything is scanned, whatever the format.
fn preflight(settings: &Settings) -> Result<()> {
    if find_program(&settings.dot_program).is_none() {
        return Err(PlugdepsError::GraphvizNotFound(settings.dot_program.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::cli::{preflight, Cli};
    use crate::config::{OutputFormat, Settings};
    use crate::error::PlugdepsError;

    #[test]
    fn parses_flags_into_overrides() {
        let cli = Cli::try_parse_from([
            "plugdeps",
            "--dir",
            "plugins",
            "--format",
            "mermaid",
            "--output",
            "graphs",
            "--show-external",
        ])
        .expect("parse args");

        let overrides = cli.overrides();
        assert_eq!(overrides.root, Some(PathBuf::from("plugins")));
        assert_eq!(overrides.format, Some(OutputFormat::Mermaid));
        assert_eq!(overrides.output_dir, Some(PathBuf::from("graphs")));
        assert_eq!(overrides.show_external, Some(true));
        assert!(!cli.json);
    }

    #[test]
    fn show_external_accepts_explicit_value() {
        let cli = Cli::try_parse_from(["plugdeps", "--dir", "plugins", "--show-external=false"])
            .expect("parse args");
        assert_eq!(cli.overrides().show_external, Some(false));

        let cli = Cli::try_parse_from(["plugdeps", "--dir", "plugins"]).expect("parse args");
        assert_eq!(cli.overrides().show_external, None);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["plugdeps", "--dir", "plugins", "--format", "png"])
            .expect_err("png is not a format");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn preflight_requires_graphviz_for_every_format() {
        let mut settings = Settings::new("plugins");
        settings.dot_program = "plugdeps-no-such-graphviz-binary".to_string();

        for format in [OutputFormat::Mermaid, OutputFormat::Graphviz, OutputFormat::Both] {
            settings.format = format;
            let err = preflight(&settings).expect_err("graphviz required");
            assert!(matches!(err, PlugdepsError::GraphvizNotFound(_)));
        }
    }
}
