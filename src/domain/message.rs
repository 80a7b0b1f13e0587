//! Commit message and `--date` formatting for a contribution timestamp.

use chrono::{DateTime, FixedOffset};

/// Human-readable commit message for a contribution, minute precision.
pub fn contribution_message(timestamp: &DateTime<FixedOffset>) -> String {
    format!("Contribution: {}", timestamp.format("%Y-%m-%d %H:%M"))
}

/// Date string accepted by `git commit --date` and `GIT_COMMITTER_DATE`.
///
/// Carries the offset so git does not reinterpret the wall-clock time in its own zone.
pub fn git_date(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S %z").to_string()
}
