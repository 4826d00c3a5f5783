use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Minutes from midnight, 0..=1440.
pub type Minute = u16;

pub const MINUTES_PER_DAY: Minute = 1440;

/// `end < start` means the interval crosses midnight into the next day.
/// `end == start` is an empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: Minute,
    pub end: Minute,
}

impl TimeInterval {
    pub fn new(start: Minute, end: Minute) -> Self {
        Self { start, end }
    }

    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }

    pub fn is_same_day(&self) -> bool {
        self.end > self.start
    }
}

/// Weekday index 0 = Sunday … 6 = Saturday, each list sorted by start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub days: [Vec<TimeInterval>; 7],
}

impl WeeklySchedule {
    /// No intervals at all: closed every day.
    pub fn closed() -> Self {
        Self {
            days: Default::default(),
        }
    }

    /// Used until a schedule has been fetched or restored: 07:00–24:00 daily.
    pub fn fallback() -> Self {
        let day = vec![TimeInterval::new(7 * 60, MINUTES_PER_DAY)];
        Self {
            days: std::array::from_fn(|_| day.clone()),
        }
    }

    pub fn day(&self, index: usize) -> &[TimeInterval] {
        &self.days[index % 7]
    }

    pub fn interval_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// chrono weekday → schedule index (Sunday = 0).
pub fn weekday_index(w: Weekday) -> usize {
    w.num_days_from_sunday() as usize
}

pub fn previous_day(index: usize) -> usize {
    (index + 6) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_day_wraps_sunday_to_saturday() {
        assert_eq!(previous_day(0), 6);
        assert_eq!(previous_day(6), 5);
    }

    #[test]
    fn fallback_opens_every_day_from_seven() {
        let s = WeeklySchedule::fallback();
        for d in 0..7 {
            assert_eq!(s.day(d), &[TimeInterval::new(420, 1440)]);
        }
    }

    #[test]
    fn sunday_is_index_zero() {
        assert_eq!(weekday_index(Weekday::Sun), 0);
        assert_eq!(weekday_index(Weekday::Sat), 6);
    }
}
