use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to prepare DOT input: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("failed to run {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Resolves the Graphviz program on `PATH`.
pub fn find_program(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

/// Writes `dot_source` to a temporary file and asks `program` to turn it into
/// an SVG at `output`. The temporary file is removed on every path.
pub fn render_svg(dot_source: &str, output: &Path, program: &str) -> Result<(), RenderError> {
    render_svg_in(dot_source, output, program, &std::env::temp_dir())
}

pub fn render_svg_in(
    dot_source: &str,
    output: &Path,
    program: &str,
    scratch_dir: &Path,
) -> Result<(), RenderError> {
    let mut input = tempfile::Builder::new()
        .prefix("deps")
        .suffix(".dot")
        .tempfile_in(scratch_dir)
        .map_err(RenderError::TempFile)?;
    input
        .write_all(dot_source.as_bytes())
        .map_err(RenderError::TempFile)?;
    input.flush().map_err(RenderError::TempFile)?;

    let result = Command::new(program)
        .arg("-Tsvg")
        .arg("-o")
        .arg(output)
        .arg(input.path())
        .output()
        .map_err(|source| RenderError::Launch {
            program: program.to_string(),
            source,
        })?;

    if result.status.success() {
        Ok(())
    } else {
        Err(RenderError::Failed {
            program: program.to_string(),
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        })
    }
}
