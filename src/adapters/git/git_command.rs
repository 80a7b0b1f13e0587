use crate::domain::{AppError, git_date};
use crate::ports::Git;
use chrono::{DateTime, FixedOffset};
use git2::{ErrorCode, Repository};
use std::path::PathBuf;
use std::process::{Command, Output};

const COMMITTER_DATE_ENV: &str = "GIT_COMMITTER_DATE";

/// `Git` port backed by the `git` executable, with libgit2 for read-only queries.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run_output(&self, args: &[&str], envs: &[(&str, &str)]) -> Result<Output, AppError> {
        let mut command = Command::new("git");
        command.args(args).current_dir(&self.root);
        for (key, value) in envs {
            command.env(key, value);
        }

        let output = command
            .output()
            .map_err(|e| AppError::git(format!("git {}", args.join(" ")), e.to_string()))?;

        if !output.status.success() {
            let combined = combined_output(&output);
            return Err(AppError::git(
                format!("git {}", args.join(" ")),
                if combined.is_empty() { format!("exited with {}", output.status) } else { combined },
            ));
        }

        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = self.run_output(args, &[])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::open(&self.root)
            .map_err(|e| AppError::git("git2::Repository::open", e.message()))
    }
}

fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Git for GitCommandAdapter {
    fn init(&self, branch: &str) -> Result<(), AppError> {
        self.run(&["init", "-b", branch])?;
        Ok(())
    }

    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.run(&["config", key, value])?;
        Ok(())
    }

    fn stage_all(&self) -> Result<(), AppError> {
        self.run(&["add", "--all"])?;
        Ok(())
    }

    fn commit(&self, message: &str, timestamp: &DateTime<FixedOffset>) -> Result<(), AppError> {
        let date = git_date(timestamp);
        self.run_output(&["commit", "-m", message, "--date", &date], &[(COMMITTER_DATE_ENV, &date)])?;
        Ok(())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.run(&["remote", "add", name, url])?;
        Ok(())
    }

    fn checkout_branch(&self, branch: &str) -> Result<(), AppError> {
        self.run(&["checkout", "-B", branch])?;
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(&["push", "-u", remote, branch])?;
        Ok(())
    }

    fn commit_count(&self) -> Result<usize, AppError> {
        let repo = self.repo()?;
        match repo.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(0);
            }
            Err(e) => return Err(AppError::git("git2::Repository::head", e.message())),
        }

        let mut walk =
            repo.revwalk().map_err(|e| AppError::git("git2::Repository::revwalk", e.message()))?;
        walk.push_head().map_err(|e| AppError::git("git2::Revwalk::push_head", e.message()))?;
        let mut count = 0;
        for oid in walk {
            oid.map_err(|e| AppError::git("git2::Revwalk::next", e.message()))?;
            count += 1;
        }
        Ok(count)
    }
}
