//! Time utilities: parsing HH:MM into minutes-of-day, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::{MINUTES_PER_DAY, Minute};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// "HH:MM" → minute of day. "24:00" is accepted as 1440.
pub fn parse_minute(t: &str) -> Option<Minute> {
    let t = t.trim();
    if t == "24:00" {
        return Some(MINUTES_PER_DAY);
    }
    parse_time(t).map(|nt| (nt.hour() * 60 + nt.minute()) as Minute)
}

/// 1440 is printed as "24:00", not "00:00".
pub fn format_minute(m: Minute) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

pub fn minute_of_day<T: Timelike>(at: &T) -> Minute {
    (at.hour() * 60 + at.minute()) as Minute
}

/// Parse a local timestamp given on the command line ("YYYY-MM-DD HH:MM").
pub fn parse_local_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}
