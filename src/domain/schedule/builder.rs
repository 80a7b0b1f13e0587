use chrono::{DateTime, Datelike, Days, TimeDelta, TimeZone, Weekday};

use super::{COMMIT_SPACING_MINUTES, CommitJob, MAX_COMMITS_CEILING, Schedule, ScheduleParams};
use crate::ports::RandomSource;

const PERCENT: u32 = 100;

/// Clamp a requested per-day cap into `[1, MAX_COMMITS_CEILING]`.
pub fn effective_max_commits(requested: i64) -> u32 {
    requested.clamp(1, i64::from(MAX_COMMITS_CEILING)) as u32
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

impl Schedule {
    /// Build the full schedule for `params.total_days` days starting at `window_start`.
    ///
    /// Each non-excluded day consumes one frequency draw, and each active day one
    /// more draw for its commit count. Weekend days skipped by `skip_weekends`
    /// consume nothing. Days whose local date cannot be represented are skipped.
    pub fn build<Tz: TimeZone>(
        window_start: &DateTime<Tz>,
        params: &ScheduleParams,
        target_file: &str,
        rng: &mut impl RandomSource,
    ) -> Self {
        let max_commits = effective_max_commits(params.max_commits_per_day);
        let frequency = u32::from(params.frequency);
        let mut jobs = Vec::new();

        for offset in 0..params.total_days {
            let Some(day) = window_start.clone().checked_add_days(Days::new(u64::from(offset)))
            else {
                continue;
            };

            if params.skip_weekends && is_weekend(day.weekday()) {
                continue;
            }

            if rng.below(PERCENT) >= frequency {
                continue;
            }

            let commits_today = rng.below(max_commits) + 1;
            for minute in 0..commits_today {
                let spacing = TimeDelta::minutes(i64::from(minute) * COMMIT_SPACING_MINUTES);
                let timestamp = day.clone() + spacing;
                jobs.push(CommitJob {
                    timestamp: timestamp.fixed_offset(),
                    target_file: target_file.to_string(),
                });
            }
        }

        Schedule { jobs }
    }
}
