use std::path::{Path, PathBuf};

use crate::config::{ConfigError, Overrides, Settings, SettingsFile};

pub const SETTINGS_FILE_NAME: &str = ".plugdeps.toml";

pub fn resolve_settings(overrides: Overrides) -> Result<Settings, ConfigError> {
    let root = overrides
        .root
        .filter(|root| !root.as_os_str().is_empty())
        .ok_or(ConfigError::EmptyRootDir)?;

    let file = match overrides.config_path {
        Some(path) => load_settings_file(&path)?,
        None => find_settings_file(&root)?.unwrap_or_default(),
    };

    let mut settings = Settings::new(root);
    apply_file(&mut settings, file);

    if let Some(format) = overrides.format {
        settings.format = format;
    }
    if let Some(output_dir) = overrides.output_dir {
        settings.output_dir = output_dir;
    }
    if let Some(show_external) = overrides.show_external {
        settings.show_external = show_external;
    }

    Ok(settings)
}

pub fn load_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Looks for the implicit settings file inside the plugins directory.
pub fn find_settings_file(root: &Path) -> Result<Option<SettingsFile>, ConfigError> {
    let candidate: PathBuf = root.join(SETTINGS_FILE_NAME);
    if !candidate.is_file() {
        return Ok(None);
    }
    load_settings_file(&candidate).map(Some)
}

fn apply_file(settings: &mut Settings, file: SettingsFile) {
    if let Some(format) = file.format {
        settings.format = format;
    }
    if let Some(output) = file.output {
        settings.output_dir = output;
    }
    if let Some(show_external) = file.show_external {
        settings.show_external = show_external;
    }
    if let Some(name) = file.mermaid_file {
        settings.mermaid_file = name;
    }
    if let Some(name) = file.svg_file {
        settings.svg_file = name;
    }
    if let Some(program) = file.dot_program {
        settings.dot_program = program;
    }
}
