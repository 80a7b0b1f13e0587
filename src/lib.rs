//! backdate: synthesize a dated commit history and optionally publish it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, PlanOutput, generate, plan};
pub use domain::{AppError, CommitJob, GeneratorConfig, GeneratorOptions, Schedule, ScheduleParams};
