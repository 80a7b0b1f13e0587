pub mod config;
pub mod error;
pub mod message;
pub mod schedule;
pub mod workspace;

pub use config::{ConfigFile, GeneratorConfig, GeneratorOptions};
pub use error::AppError;
pub use message::{contribution_message, git_date};
pub use schedule::{
    ANCHOR_HOUR, CommitJob, MAX_COMMITS_CEILING, Schedule, ScheduleParams, effective_max_commits,
    window_end, window_start,
};
