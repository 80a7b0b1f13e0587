//! Generator configuration: raw options, merge, and validation.

mod file;
mod options;

pub use file::ConfigFile;
pub use options::{
    DEFAULT_BRANCH, DEFAULT_DAYS_AFTER, DEFAULT_DAYS_BEFORE, DEFAULT_FREQUENCY,
    DEFAULT_MAX_COMMITS, DEFAULT_TARGET_FILE, GeneratorConfig, GeneratorOptions,
};
