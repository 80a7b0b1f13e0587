//! Generate a dated commit history inside an already-created working directory.

pub mod emitter;
pub mod publish;

use chrono::{DateTime, TimeZone};
use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, GeneratorConfig, Schedule};
use crate::ports::{Git, RandomSource, RepositoryFilesystem};

pub use emitter::{CommitEmitter, EmitReport, FailureStage, JobFailure};
pub use publish::{PublishOutcome, REMOTE, publish};

/// Repository setup or publish step that failed without stopping the run.
#[derive(Debug)]
pub struct StepFailure {
    pub step: &'static str,
    pub error: AppError,
}

/// Everything that happened during one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Jobs in the built schedule.
    pub scheduled: usize,
    pub active_days: usize,
    pub emit: EmitReport,
    pub setup_failures: Vec<StepFailure>,
    /// `None` when no repository was configured.
    pub published: Option<PublishOutcome>,
    /// Commits reachable from HEAD after emission, if it could be read.
    pub history_len: Option<usize>,
}

impl GenerateReport {
    /// True when nothing was recorded as failed.
    pub fn is_clean(&self) -> bool {
        self.emit.is_clean()
            && self.setup_failures.is_empty()
            && self.published.as_ref().is_none_or(PublishOutcome::pushed)
    }
}

/// Initialize the repository, emit the schedule, and publish when a remote is set.
///
/// Only fatal conditions are handled by the caller; every git failure here is
/// recorded in the report and the run carries on.
pub fn execute<G, F, Tz, R>(
    ctx: &AppContext<G, F>,
    config: &GeneratorConfig,
    window_start: &DateTime<Tz>,
    rng: &mut R,
) -> GenerateReport
where
    G: Git,
    F: RepositoryFilesystem,
    Tz: TimeZone,
    R: RandomSource,
{
    let mut setup_failures = Vec::new();
    let mut setup = |step: &'static str, result: Result<(), AppError>| {
        if let Err(error) = result {
            warn!(step, error = %error, "repository setup step failed");
            setup_failures.push(StepFailure { step, error });
        }
    };

    setup("init", ctx.git().init(&config.branch));
    if let Some(name) = &config.user_name {
        setup("config user.name", ctx.git().set_config("user.name", name));
    }
    if let Some(email) = &config.user_email {
        setup("config user.email", ctx.git().set_config("user.email", email));
    }

    let schedule =
        Schedule::build(window_start, &config.schedule_params(), &config.target_file, rng);
    info!(jobs = schedule.len(), active_days = schedule.active_days(), "built schedule");

    let emit = CommitEmitter::new(ctx).emit_all(&schedule);
    info!(committed = emit.committed, failed = emit.failures.len(), "emitted contributions");

    let history_len = match ctx.git().commit_count() {
        Ok(count) => Some(count),
        Err(error) => {
            warn!(error = %error, "could not read commit history");
            None
        }
    };

    let published =
        config.repository.as_deref().map(|url| publish(ctx.git(), url, &config.branch));

    GenerateReport {
        scheduled: schedule.len(),
        active_days: schedule.active_days(),
        emit,
        setup_failures,
        published,
        history_len,
    }
}
