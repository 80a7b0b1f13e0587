//! Test double for `RepositoryFilesystem`.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Debug, Default)]
pub struct MockRepositoryFs {
    files: Mutex<BTreeMap<String, String>>,
    failing_appends: Mutex<HashSet<usize>>,
    append_attempts: Mutex<usize>,
}

impl MockRepositoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make only the `n`-th append attempt (0-based) fail with a permission error.
    pub fn fail_append_attempt(&self, n: usize) {
        self.failing_appends.lock().unwrap().insert(n);
    }

    pub fn append_attempts(&self) -> usize {
        *self.append_attempts.lock().unwrap()
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let attempt = {
            let mut attempts = self.append_attempts.lock().unwrap();
            let current = *attempts;
            *attempts += 1;
            current
        };
        if self.failing_appends.lock().unwrap().contains(&attempt) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock append failure",
            )));
        }
        self.files.lock().unwrap().entry(path.to_string()).or_default().push_str(content);
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
