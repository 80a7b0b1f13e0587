//! Shared testing utilities for backdate CLI tests.

use assert_cmd::Command;
use git2::Repository;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        std::fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory used as the emulated `$HOME`, so no global git config leaks in.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in; generated repositories land below it.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `backdate` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("backdate").expect("Failed to locate backdate binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create a bare repository to push to and return its path.
    pub fn bare_remote(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        Repository::init_bare(&path).expect("Failed to init bare remote");
        path
    }

    /// Open a generated repository below the work directory.
    pub fn open_repo(&self, name: &str) -> Repository {
        Repository::open(self.work_dir.join(name)).expect("Failed to open generated repository")
    }

    /// Messages and author times (seconds, offset minutes) of HEAD's history, oldest first.
    pub fn history(&self, name: &str) -> Vec<(String, i64, i32)> {
        let repo = self.open_repo(name);
        let mut walk = repo.revwalk().unwrap();
        walk.push_head().unwrap();
        walk.set_sorting(git2::Sort::TIME | git2::Sort::REVERSE).unwrap();
        walk.map(|oid| {
            let commit = repo.find_commit(oid.unwrap()).unwrap();
            let when = commit.author().when();
            (
                commit.message().unwrap_or_default().trim_end().to_string(),
                when.seconds(),
                when.offset_minutes(),
            )
        })
        .collect()
    }
}
