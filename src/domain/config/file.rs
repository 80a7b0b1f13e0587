//! Pure parse for the optional `--config` TOML file.

use std::path::PathBuf;

use serde::Deserialize;

use super::GeneratorOptions;
use crate::domain::AppError;

/// Defaults read from a TOML file. Every key is optional; CLI flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub repository: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub target_file: Option<String>,
    pub branch: Option<String>,
    pub no_weekends: Option<bool>,
    pub frequency: Option<i64>,
    pub days_before: Option<i64>,
    pub days_after: Option<i64>,
    pub max_commits: Option<i64>,
    pub directory: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }
}

impl From<ConfigFile> for GeneratorOptions {
    fn from(file: ConfigFile) -> Self {
        GeneratorOptions {
            repository: file.repository,
            user_name: file.user_name,
            user_email: file.user_email,
            target_file: file.target_file,
            branch: file.branch,
            skip_weekends: file.no_weekends,
            frequency: file.frequency,
            days_before: file.days_before,
            days_after: file.days_after,
            max_commits: file.max_commits,
            directory: file.directory,
            seed: file.seed,
        }
    }
}
