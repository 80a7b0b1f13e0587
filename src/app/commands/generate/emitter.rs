//! Turns each scheduled job into a marker append plus a dated commit.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, error};

use crate::app::AppContext;
use crate::domain::{AppError, CommitJob, Schedule};
use crate::ports::{Git, RepositoryFilesystem};

/// Step of a contribution that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Append,
    Stage,
    Commit,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureStage::Append => "append",
            FailureStage::Stage => "stage",
            FailureStage::Commit => "commit",
        };
        f.write_str(label)
    }
}

/// A contribution that could not be completed. The run continues past it.
#[derive(Debug)]
pub struct JobFailure {
    pub timestamp: DateTime<FixedOffset>,
    pub stage: FailureStage,
    pub error: AppError,
}

/// Result of emitting a whole schedule.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub attempted: usize,
    pub committed: usize,
    pub failures: Vec<JobFailure>,
}

impl EmitReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Emits contributions one at a time against a single working tree.
///
/// `emit` takes `&mut self`: the append, stage and commit of one job finish
/// before the next job can start.
pub struct CommitEmitter<'a, G: Git, F: RepositoryFilesystem> {
    ctx: &'a AppContext<G, F>,
}

impl<'a, G: Git, F: RepositoryFilesystem> CommitEmitter<'a, G, F> {
    pub fn new(ctx: &'a AppContext<G, F>) -> Self {
        Self { ctx }
    }

    /// Emit one job. No retries.
    pub fn emit(&mut self, job: &CommitJob) -> Result<(), JobFailure> {
        let message = job.message();
        let fail = |stage, error| JobFailure { timestamp: job.timestamp, stage, error };

        self.ctx
            .files()
            .append_file(&job.target_file, &format!("{message}\n\n"))
            .map_err(|e| fail(FailureStage::Append, e))?;
        self.ctx.git().stage_all().map_err(|e| fail(FailureStage::Stage, e))?;
        self.ctx.git().commit(&message, &job.timestamp).map_err(|e| fail(FailureStage::Commit, e))?;

        debug!(timestamp = %job.timestamp, "committed contribution");
        Ok(())
    }

    /// Emit every job in schedule order, collecting failures instead of stopping.
    pub fn emit_all(&mut self, schedule: &Schedule) -> EmitReport {
        let mut report = EmitReport::default();

        for job in schedule {
            report.attempted += 1;
            match self.emit(job) {
                Ok(()) => report.committed += 1,
                Err(failure) => {
                    error!(
                        timestamp = %failure.timestamp,
                        stage = %failure.stage,
                        error = %failure.error,
                        "contribution failed"
                    );
                    report.failures.push(failure);
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScheduleParams;
    use crate::testing::{FakeGit, MockRepositoryFs, ScriptedRandom};
    use chrono::TimeZone;

    fn context() -> AppContext<FakeGit, MockRepositoryFs> {
        AppContext::new(FakeGit::new(), MockRepositoryFs::new())
    }

    // 2024-03-05 20:00, three consecutive days, one commit each
    fn three_day_schedule() -> Schedule {
        let start = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 5, 20, 0, 0).unwrap();
        let params =
            ScheduleParams { total_days: 3, skip_weekends: false, frequency: 100, max_commits_per_day: 1 };
        Schedule::build(&start, &params, "README.md", &mut ScriptedRandom::zeros())
    }

    #[test]
    fn appends_message_with_blank_line_and_commits() {
        let ctx = context();
        let schedule = three_day_schedule();
        let report = CommitEmitter::new(&ctx).emit_all(&schedule);

        assert_eq!(report.attempted, 3);
        assert_eq!(report.committed, 3);
        assert!(report.is_clean());
        assert_eq!(
            ctx.files().read_file("README.md").unwrap(),
            "Contribution: 2024-03-05 20:00\n\n\
             Contribution: 2024-03-06 20:00\n\n\
             Contribution: 2024-03-07 20:00\n\n"
        );
    }

    #[test]
    fn commits_carry_job_timestamps_in_order() {
        let ctx = context();
        let schedule = three_day_schedule();
        CommitEmitter::new(&ctx).emit_all(&schedule);

        let committed: Vec<_> = ctx.git().commits.lock().unwrap().iter().map(|(_, ts)| *ts).collect();
        let expected: Vec<_> = schedule.iter().map(|job| job.timestamp).collect();
        assert_eq!(committed, expected);
        assert_eq!(ctx.git().calls(), vec![
            "add --all",
            "commit -m Contribution: 2024-03-05 20:00",
            "add --all",
            "commit -m Contribution: 2024-03-06 20:00",
            "add --all",
            "commit -m Contribution: 2024-03-07 20:00",
        ]);
    }

    #[test]
    fn append_failure_skips_job_and_continues() {
        let ctx = context();
        ctx.files().fail_append_attempt(0);
        let report = CommitEmitter::new(&ctx).emit_all(&three_day_schedule());

        assert_eq!(ctx.files().append_attempts(), 3);
        assert_eq!(report.committed, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, FailureStage::Append);
        assert_eq!(ctx.git().commit_messages(), vec![
            "Contribution: 2024-03-06 20:00",
            "Contribution: 2024-03-07 20:00",
        ]);
    }

    #[test]
    fn commit_failure_is_reported_per_job() {
        let ctx = context();
        ctx.git().fail_commit_attempt(1);
        let report = CommitEmitter::new(&ctx).emit_all(&three_day_schedule());

        assert_eq!(report.committed, 2);
        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.stage, FailureStage::Commit);
        assert_eq!(failure.timestamp.to_rfc3339(), "2024-03-06T20:00:00+00:00");
        assert!(failure.error.to_string().contains("nothing to commit"));
    }

    #[test]
    fn stage_failure_prevents_commit() {
        let ctx = context();
        ctx.git().fail("add");
        let report = CommitEmitter::new(&ctx).emit_all(&three_day_schedule());

        assert_eq!(report.committed, 0);
        assert_eq!(report.failures.len(), 3);
        assert!(report.failures.iter().all(|f| f.stage == FailureStage::Stage));
        assert!(ctx.git().commit_messages().is_empty());
    }

    #[test]
    fn empty_schedule_does_nothing() {
        let ctx = context();
        let report = CommitEmitter::new(&ctx).emit_all(&Schedule::default());
        assert_eq!(report.attempted, 0);
        assert!(ctx.git().calls().is_empty());
        assert!(!ctx.files().file_exists("README.md"));
    }
}
