//! Dry run: build the schedule a real run would build, without side effects.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;

use crate::domain::{AppError, GeneratorConfig, Schedule, window_end};
use crate::ports::RandomSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedJob {
    pub timestamp: DateTime<FixedOffset>,
    pub target_file: String,
    pub message: String,
}

/// The schedule a run with this configuration and seed would emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOutput {
    pub seed: u64,
    pub window_start: DateTime<FixedOffset>,
    pub window_end: DateTime<FixedOffset>,
    pub total_days: u32,
    pub active_days: usize,
    pub jobs: Vec<PlannedJob>,
}

impl PlanOutput {
    /// One line per job followed by a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for job in &self.jobs {
            let _ = writeln!(out, "{}  {}", job.timestamp.format("%Y-%m-%d %H:%M:%S %z"), job.message);
        }
        let _ = writeln!(
            out,
            "{} commit(s) on {} active day(s) between {} and {} (seed {})",
            self.jobs.len(),
            self.active_days,
            self.window_start.format("%Y-%m-%d"),
            self.window_end.format("%Y-%m-%d"),
            self.seed
        );
        out
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn execute<Tz, R>(
    config: &GeneratorConfig,
    window_start: &DateTime<Tz>,
    seed: u64,
    rng: &mut R,
) -> Result<PlanOutput, AppError>
where
    Tz: TimeZone,
    R: RandomSource,
{
    let total_days = config.total_days();
    let end = window_end(window_start, total_days)
        .ok_or_else(|| AppError::config_error("schedule window is out of range"))?;
    let schedule = Schedule::build(window_start, &config.schedule_params(), &config.target_file, rng);

    Ok(PlanOutput {
        seed,
        window_start: window_start.fixed_offset(),
        window_end: end.fixed_offset(),
        total_days,
        active_days: schedule.active_days(),
        jobs: schedule
            .iter()
            .map(|job| PlannedJob {
                timestamp: job.timestamp,
                target_file: job.target_file.clone(),
                message: job.message(),
            })
            .collect(),
    })
}
