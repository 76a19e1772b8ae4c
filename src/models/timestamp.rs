use super::day_key::DayKey;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;

/// Point in time of a log line, without the year.
///
/// All lines of one log belong to the same observation window, so ordering
/// is done on `(month, day, hour, minute)` only. Field order matters: the
/// derived `Ord` compares them lexicographically.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Timestamp {
    pub fn new(month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn day_key(&self) -> DayKey {
        DayKey::new(self.month, self.day)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt.month(), dt.day(), dt.hour(), dt.minute())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02} {:02}:{:02}",
            self.month, self.day, self.hour, self.minute
        )
    }
}
