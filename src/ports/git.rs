use chrono::{DateTime, FixedOffset};

use crate::domain::AppError;

/// Version-control operations needed to build and publish a generated history.
///
/// All calls are synchronous and operate on a single working tree.
pub trait Git {
    /// Initialize a repository whose first branch is `branch`.
    fn init(&self, branch: &str) -> Result<(), AppError>;

    /// Set a repository-local config value (e.g. `user.name`).
    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Stage every change in the working tree.
    fn stage_all(&self) -> Result<(), AppError>;

    /// Commit the index with `message`, authored and committed at `timestamp`.
    ///
    /// Fails when there is nothing staged.
    fn commit(&self, message: &str, timestamp: &DateTime<FixedOffset>) -> Result<(), AppError>;

    /// Register a remote.
    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError>;

    /// Create or reset `branch` to the current commit and check it out.
    fn checkout_branch(&self, branch: &str) -> Result<(), AppError>;

    /// Push `branch` to `remote` and set upstream tracking.
    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError>;

    /// Number of commits reachable from HEAD. Zero for an unborn branch.
    fn commit_count(&self) -> Result<usize, AppError>;
}
