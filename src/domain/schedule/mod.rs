//! Commit schedule: which days receive activity, how many commits, and when.

mod builder;
mod window;

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::message::contribution_message;

pub use builder::effective_max_commits;
pub use window::{window_end, window_start};

/// Local hour of the first commit on an active day.
pub const ANCHOR_HOUR: u32 = 20;

/// Minutes between consecutive commits on the same day.
pub const COMMIT_SPACING_MINUTES: i64 = 1;

/// Upper bound for commits on a single day.
pub const MAX_COMMITS_CEILING: u32 = 20;

/// One contribution to emit: a marker append plus a commit at `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitJob {
    pub timestamp: DateTime<FixedOffset>,
    pub target_file: String,
}

impl CommitJob {
    pub fn message(&self) -> String {
        contribution_message(&self.timestamp)
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Inputs to the schedule builder other than the window start and the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleParams {
    pub total_days: u32,
    pub skip_weekends: bool,
    /// Percent chance that an eligible day is active.
    pub frequency: u8,
    /// Requested cap; clamped into `[1, MAX_COMMITS_CEILING]` when building.
    pub max_commits_per_day: i64,
}

/// Chronologically ordered commit jobs, materialized before any emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    jobs: Vec<CommitJob>,
}

impl Schedule {
    pub fn jobs(&self) -> &[CommitJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommitJob> {
        self.jobs.iter()
    }

    /// Number of distinct calendar days that received at least one job.
    pub fn active_days(&self) -> usize {
        self.jobs.iter().map(CommitJob::date).collect::<BTreeSet<_>>().len()
    }
}

impl IntoIterator for Schedule {
    type Item = CommitJob;
    type IntoIter = std::vec::IntoIter<CommitJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a CommitJob;
    type IntoIter = std::slice::Iter<'a, CommitJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
