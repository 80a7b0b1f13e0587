use tracing::{info, warn};

use super::StepFailure;
use crate::domain::AppError;
use crate::ports::Git;

/// Name of the remote the generated history is pushed to.
pub const REMOTE: &str = "origin";

/// Result of publishing to the configured remote.
#[derive(Debug)]
pub struct PublishOutcome {
    pub remote: String,
    pub branch: String,
    pub failures: Vec<StepFailure>,
}

impl PublishOutcome {
    pub fn pushed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Register the remote, move onto `branch`, and push with upstream tracking.
///
/// Every step runs even when an earlier one failed.
pub fn publish<G: Git>(git: &G, url: &str, branch: &str) -> PublishOutcome {
    let mut failures = Vec::new();

    record(&mut failures, "remote add", git.add_remote(REMOTE, url));
    record(&mut failures, "checkout", git.checkout_branch(branch));
    record(&mut failures, "push", git.push(REMOTE, branch));

    if failures.is_empty() {
        info!(remote = REMOTE, branch, "pushed history");
    }

    PublishOutcome { remote: REMOTE.to_string(), branch: branch.to_string(), failures }
}

fn record(failures: &mut Vec<StepFailure>, step: &'static str, result: Result<(), AppError>) {
    if let Err(error) = result {
        warn!(step, error = %error, "publish step failed");
        failures.push(StepFailure { step, error });
    }
}
