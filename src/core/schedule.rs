//! Weekly opening hours and the "open now" query.

use crate::models::rows::HoursRow;
use crate::models::schedule::{TimeInterval, WeeklySchedule, previous_day, weekday_index};
use crate::utils::time::{minute_of_day, parse_minute};
use chrono::{Datelike, Timelike};
use tracing::debug;

const CLOSED_TOKEN: &str = "chiuso";

/// Italian day name (full or 3-letter, with or without accent) → index, Sunday = 0.
pub fn day_index(day: &str) -> Option<usize> {
    match day.trim().to_lowercase().as_str() {
        "domenica" | "dom" => Some(0),
        "lunedì" | "lunedi" | "lun" => Some(1),
        "martedì" | "martedi" | "mar" => Some(2),
        "mercoledì" | "mercoledi" | "mer" => Some(3),
        "giovedì" | "giovedi" | "gio" => Some(4),
        "venerdì" | "venerdi" | "ven" => Some(5),
        "sabato" | "sab" => Some(6),
        _ => None,
    }
}

/// Display name for a weekday index.
pub fn day_name(index: usize) -> &'static str {
    const NAMES: [&str; 7] = [
        "Domenica",
        "Lunedì",
        "Martedì",
        "Mercoledì",
        "Giovedì",
        "Venerdì",
        "Sabato",
    ];
    NAMES[index % 7]
}

fn parse_bound(s: &str) -> Option<u16> {
    if s.trim().eq_ignore_ascii_case(CLOSED_TOKEN) {
        return None;
    }
    parse_minute(s)
}

/// Build the weekly schedule. Rows with an unknown day, "CHIUSO" or a bad
/// time contribute nothing; zero rows give a schedule closed every day.
pub fn parse_weekly_hours(rows: &[HoursRow]) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::closed();

    for row in rows {
        let Some(day) = day_index(&row.day) else {
            debug!(day = %row.day, "unknown day name, row skipped");
            continue;
        };
        let (Some(start), Some(end)) = (parse_bound(&row.start), parse_bound(&row.end)) else {
            debug!(day = %row.day, start = %row.start, end = %row.end, "closed or unparsable hours");
            continue;
        };
        schedule.days[day].push(TimeInterval::new(start, end));
    }

    for day in schedule.days.iter_mut() {
        day.sort_by_key(|i| i.start);
    }
    schedule
}

/// Whether the venue is open at `at` (local wall-clock time).
///
/// Overnight intervals (end < start) count from their start until midnight
/// on their own day, and from midnight until their end on the next day.
pub fn is_open<T: Datelike + Timelike>(schedule: &WeeklySchedule, at: &T) -> bool {
    let day = weekday_index(at.weekday());
    let now = minute_of_day(at);

    let today = schedule.day(day).iter().any(|i| {
        (i.is_same_day() && now >= i.start && now < i.end) || (i.is_overnight() && now >= i.start)
    });
    if today {
        return true;
    }

    schedule
        .day(previous_day(day))
        .iter()
        .any(|j| j.is_overnight() && now < j.end)
}
