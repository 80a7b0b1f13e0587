//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::info;

use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::git::GitCommandAdapter;
use crate::adapters::random::{XorShift64, time_seed};
use crate::app::AppContext;
use crate::app::commands;
use crate::domain::workspace::directory_name;
use crate::domain::{AppError, GeneratorConfig, window_end, window_start};

pub use crate::app::commands::generate::{
    EmitReport, FailureStage, GenerateReport, JobFailure, PublishOutcome, StepFailure,
};
pub use crate::app::commands::plan::{PlanOutput, PlannedJob};

/// Result of a full generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Working directory that holds the generated repository.
    pub directory: PathBuf,
    pub seed: u64,
    pub report: GenerateReport,
}

/// Create an `AppContext` for a repository rooted at `path`.
fn create_context(path: PathBuf) -> AppContext<GitCommandAdapter, FilesystemStore> {
    let git = GitCommandAdapter::new(path.clone());
    let files = FilesystemStore::new(path);
    AppContext::new(git, files)
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Generate a history in a new directory under the current directory.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateOutcome, AppError> {
    generate_in(&std::env::current_dir()?, config, &Local::now())
}

/// Generate a history in a new directory under `parent`, treating `now` as the current time.
///
/// Fails before touching git when the window cannot be computed or the working
/// directory cannot be created. Everything after that is reported, not returned.
pub fn generate_in<Tz>(
    parent: &Path,
    config: &GeneratorConfig,
    now: &DateTime<Tz>,
) -> Result<GenerateOutcome, AppError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let start = schedule_start(config, now)?;

    let directory = resolve_directory(parent, config, now);
    create_working_directory(&directory)?;
    info!(directory = %directory.display(), "created working directory");

    let seed = config.seed.unwrap_or_else(time_seed);
    info!(seed, "using random seed");
    let mut rng = XorShift64::new(seed);

    let ctx = create_context(directory.clone());
    let report = commands::generate::execute(&ctx, config, &start, &mut rng);

    Ok(GenerateOutcome { directory, seed, report })
}

// =============================================================================
// Plan (dry-run) API
// =============================================================================

/// Plan the schedule a run started now would emit.
pub fn plan(config: &GeneratorConfig) -> Result<PlanOutput, AppError> {
    plan_at(config, &Local::now())
}

/// Plan the schedule a run started at `now` would emit.
pub fn plan_at<Tz: TimeZone>(
    config: &GeneratorConfig,
    now: &DateTime<Tz>,
) -> Result<PlanOutput, AppError> {
    let start = schedule_start(config, now)?;
    let seed = config.seed.unwrap_or_else(time_seed);
    commands::plan::execute(config, &start, seed, &mut XorShift64::new(seed))
}

/// Window start for a run at `now`, rejecting windows whose end cannot be represented.
fn schedule_start<Tz: TimeZone>(
    config: &GeneratorConfig,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, AppError> {
    let start = window_start(now, config.days_before).ok_or_else(|| {
        AppError::config_error(format!(
            "days_before {} moves the window out of range",
            config.days_before
        ))
    })?;
    if window_end(&start, config.total_days()).is_none() {
        return Err(AppError::config_error("schedule window is out of range"));
    }
    Ok(start)
}

/// Create `directory`, failing if it already exists.
fn create_working_directory(directory: &Path) -> Result<(), AppError> {
    if let Some(parent) = directory.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(directory).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => AppError::DirectoryExists(directory.display().to_string()),
        _ => AppError::Io(e),
    })
}

fn resolve_directory<Tz>(parent: &Path, config: &GeneratorConfig, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match &config.directory {
        Some(dir) => parent.join(dir),
        None => parent.join(directory_name(config.repository.as_deref(), now)),
    }
}
