use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, FixedOffset};

use crate::domain::AppError;
use crate::ports::Git;

/// In-memory `Git` that records every call and can be told to fail.
#[derive(Default)]
pub struct FakeGit {
    pub calls: Mutex<Vec<String>>,
    pub commits: Mutex<Vec<(String, DateTime<FixedOffset>)>>,
    failing_ops: Mutex<HashSet<&'static str>>,
    failing_commit_attempts: Mutex<HashSet<usize>>,
    commit_attempts: Mutex<usize>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `op` fail (`init`, `config`, `add`, `commit`, `remote`, `checkout`, `push`).
    pub fn fail(&self, op: &'static str) {
        self.failing_ops.lock().unwrap().insert(op);
    }

    /// Make only the `n`-th commit attempt (0-based) fail.
    pub fn fail_commit_attempt(&self, n: usize) {
        self.failing_commit_attempts.lock().unwrap().insert(n);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commit_messages(&self) -> Vec<String> {
        self.commits.lock().unwrap().iter().map(|(message, _)| message.clone()).collect()
    }

    fn record(&self, op: &'static str, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing_ops.lock().unwrap().contains(op) {
            return Err(AppError::git(format!("git {call}"), format!("fake {op} failure")));
        }
        Ok(())
    }
}

impl Git for FakeGit {
    fn init(&self, branch: &str) -> Result<(), AppError> {
        self.record("init", format!("init -b {branch}"))
    }

    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.record("config", format!("config {key} {value}"))
    }

    fn stage_all(&self) -> Result<(), AppError> {
        self.record("add", "add --all".to_string())
    }

    fn commit(&self, message: &str, timestamp: &DateTime<FixedOffset>) -> Result<(), AppError> {
        let attempt = {
            let mut attempts = self.commit_attempts.lock().unwrap();
            let current = *attempts;
            *attempts += 1;
            current
        };
        self.record("commit", format!("commit -m {message}"))?;
        if self.failing_commit_attempts.lock().unwrap().contains(&attempt) {
            return Err(AppError::git(
                format!("git commit -m {message}"),
                "nothing to commit, working tree clean",
            ));
        }
        self.commits.lock().unwrap().push((message.to_string(), *timestamp));
        Ok(())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.record("remote", format!("remote add {name} {url}"))
    }

    fn checkout_branch(&self, branch: &str) -> Result<(), AppError> {
        self.record("checkout", format!("checkout -B {branch}"))
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.record("push", format!("push -u {remote} {branch}"))
    }

    fn commit_count(&self) -> Result<usize, AppError> {
        Ok(self.commits.lock().unwrap().len())
    }
}
