use chrono::{DateTime, Days, TimeZone};

use super::ANCHOR_HOUR;

/// Anchor time on `now`'s local date, moved back `days_before` calendar days.
///
/// Returns `None` when the anchor cannot be represented in `now`'s time zone.
pub fn window_start<Tz: TimeZone>(now: &DateTime<Tz>, days_before: u32) -> Option<DateTime<Tz>> {
    let anchor = now.date_naive().and_hms_opt(ANCHOR_HOUR, 0, 0)?;
    let today = now.timezone().from_local_datetime(&anchor).earliest()?;
    today.checked_sub_days(Days::new(u64::from(days_before)))
}

/// Exclusive end of a window spanning `total_days` calendar days.
pub fn window_end<Tz: TimeZone>(start: &DateTime<Tz>, total_days: u32) -> Option<DateTime<Tz>> {
    start.clone().checked_add_days(Days::new(u64::from(total_days)))
}
