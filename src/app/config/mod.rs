//! Configuration loading: optional TOML file merged under CLI flags.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, ConfigFile, GeneratorConfig, GeneratorOptions};

/// Load and parse the `--config` file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigFileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    ConfigFile::parse_toml(&content)
}

/// Merge CLI options over the config file (when given) and validate.
pub fn resolve(
    cli: GeneratorOptions,
    config_path: Option<&Path>,
) -> Result<GeneratorConfig, AppError> {
    let options = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            cli.or(load_config_file(path)?.into())
        }
        None => cli,
    };
    options.validate()
}
