use std::io;

use thiserror::Error;

/// Library-wide error type for backdate operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A user-supplied value failed validation.
    #[error("{0}")]
    Validation(String),

    /// Config file passed via `--config` does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// Working directory for the generated repository already exists.
    #[error("Directory '{0}' already exists")]
    DirectoryExists(String),

    /// Path escapes the repository root.
    #[error("Path '{0}' escapes the repository root")]
    PathTraversal(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn git<C: Into<String>, D: Into<String>>(command: C, details: D) -> Self {
        AppError::GitError { command: command.into(), details: details.into() }
    }
}
