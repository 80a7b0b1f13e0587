use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::domain::schedule::{MAX_COMMITS_CEILING, ScheduleParams};

pub const DEFAULT_FREQUENCY: u8 = 80;
pub const DEFAULT_DAYS_BEFORE: u32 = 365;
pub const DEFAULT_DAYS_AFTER: u32 = 0;
pub const DEFAULT_MAX_COMMITS: u32 = 10;
pub const DEFAULT_TARGET_FILE: &str = "README.md";
pub const DEFAULT_BRANCH: &str = "main";

/// Unvalidated options as collected from the CLI or a config file.
///
/// Numeric fields are signed so negative input reaches validation instead of the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub repository: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub target_file: Option<String>,
    pub branch: Option<String>,
    pub skip_weekends: Option<bool>,
    pub frequency: Option<i64>,
    pub days_before: Option<i64>,
    pub days_after: Option<i64>,
    pub max_commits: Option<i64>,
    pub directory: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Validated, immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub repository: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub target_file: String,
    pub branch: String,
    pub skip_weekends: bool,
    pub frequency: u8,
    pub days_before: u32,
    pub days_after: u32,
    pub max_commits_per_day: u32,
    pub directory: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl GeneratorOptions {
    /// Fill every unset field of `self` from `fallback`.
    pub fn or(self, fallback: GeneratorOptions) -> GeneratorOptions {
        GeneratorOptions {
            repository: self.repository.or(fallback.repository),
            user_name: self.user_name.or(fallback.user_name),
            user_email: self.user_email.or(fallback.user_email),
            target_file: self.target_file.or(fallback.target_file),
            branch: self.branch.or(fallback.branch),
            skip_weekends: self.skip_weekends.or(fallback.skip_weekends),
            frequency: self.frequency.or(fallback.frequency),
            days_before: self.days_before.or(fallback.days_before),
            days_after: self.days_after.or(fallback.days_after),
            max_commits: self.max_commits.or(fallback.max_commits),
            directory: self.directory.or(fallback.directory),
            seed: self.seed.or(fallback.seed),
        }
    }

    /// Apply defaults and validate into a `GeneratorConfig`.
    pub fn validate(self) -> Result<GeneratorConfig, AppError> {
        let days_before = day_count("days_before", self.days_before, DEFAULT_DAYS_BEFORE)?;
        let days_after = day_count("days_after", self.days_after, DEFAULT_DAYS_AFTER)?;
        if days_before.checked_add(days_after).is_none() {
            return Err(AppError::Validation("days_before + days_after is too large".into()));
        }

        let frequency = self.frequency.unwrap_or(i64::from(DEFAULT_FREQUENCY));
        if !(0..=100).contains(&frequency) {
            return Err(AppError::Validation("frequency must be between 0 and 100".into()));
        }

        let max_commits = self.max_commits.unwrap_or(i64::from(DEFAULT_MAX_COMMITS));
        if !(1..=i64::from(MAX_COMMITS_CEILING)).contains(&max_commits) {
            return Err(AppError::Validation(format!(
                "max_commits must be between 1 and {MAX_COMMITS_CEILING}"
            )));
        }

        let target_file = self.target_file.unwrap_or_else(|| DEFAULT_TARGET_FILE.to_string());
        validate_target_file(&target_file)?;

        let branch = self.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        if branch.trim().is_empty() || branch.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(format!("Invalid branch name '{branch}'")));
        }

        Ok(GeneratorConfig {
            repository: non_empty(self.repository),
            user_name: non_empty(self.user_name),
            user_email: non_empty(self.user_email),
            target_file,
            branch,
            skip_weekends: self.skip_weekends.unwrap_or(false),
            frequency: frequency as u8,
            days_before,
            days_after,
            max_commits_per_day: max_commits as u32,
            directory: self.directory,
            seed: self.seed,
        })
    }
}

impl GeneratorConfig {
    pub fn total_days(&self) -> u32 {
        self.days_before + self.days_after
    }

    pub fn schedule_params(&self) -> ScheduleParams {
        ScheduleParams {
            total_days: self.total_days(),
            skip_weekends: self.skip_weekends,
            frequency: self.frequency,
            max_commits_per_day: i64::from(self.max_commits_per_day),
        }
    }
}

fn day_count(name: &str, value: Option<i64>, default: u32) -> Result<u32, AppError> {
    let value = value.unwrap_or(i64::from(default));
    if value < 0 {
        return Err(AppError::Validation(format!("{name} must not be negative")));
    }
    u32::try_from(value).map_err(|_| AppError::Validation(format!("{name} is too large")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn validate_target_file(path: &str) -> Result<(), AppError> {
    if path.trim().is_empty() {
        return Err(AppError::Validation("target file must not be empty".into()));
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return Err(AppError::Validation(format!(
            "target file '{path}' must be relative to the repository"
        )));
    }
    if candidate.components().any(|c| c == Component::Normal(OsStr::new(".git"))) {
        return Err(AppError::Validation(format!("target file '{path}' is inside .git")));
    }
    if candidate.components().any(|c| matches!(c, Component::ParentDir | Component::Prefix(_))) {
        return Err(AppError::PathTraversal(path.to_string()));
    }
    if candidate.components().all(|c| matches!(c, Component::CurDir)) {
        return Err(AppError::Validation(format!("target file '{path}' is not a file path")));
    }
    Ok(())
}
