use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::graphviz::RenderError;

#[derive(Debug, Error)]
pub enum PlugdepsError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read plugins directory {path}: {source}")]
    RootDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not installed or not on PATH. Please install Graphviz first.")]
    GraphvizNotFound(String),
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlugdepsError>;
