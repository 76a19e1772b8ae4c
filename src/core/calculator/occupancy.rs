//! Per-guard occupancy: how many days a guard slept through each minute of
//! the midnight hour, and the total minutes spent asleep.

use crate::models::guard::Guard;
use crate::models::log::Log;
use serde::{Serialize, Serializer};

pub const MINUTES_PER_HOUR: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub total_minutes: u32,
    #[serde(serialize_with = "serialize_minutes")]
    pub per_minute: [u32; MINUTES_PER_HOUR],
}

fn serialize_minutes<S: Serializer>(
    minutes: &[u32; MINUTES_PER_HOUR],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(minutes.iter())
}

impl Default for Occupancy {
    fn default() -> Self {
        Self {
            total_minutes: 0,
            per_minute: [0; MINUTES_PER_HOUR],
        }
    }
}

impl Occupancy {
    /// Add the half-open asleep interval `[start, end)`.
    /// Empty or reversed intervals add nothing; minutes past 59 are clamped.
    pub fn add_interval(&mut self, start: u32, end: u32) {
        let start = (start as usize).min(MINUTES_PER_HOUR);
        let end = (end as usize).min(MINUTES_PER_HOUR);

        for slot in self.per_minute.iter_mut().take(end).skip(start) {
            *slot += 1;
            self.total_minutes += 1;
        }
    }

    /// Minute with the highest count; ties go to the earliest minute.
    /// `None` when the guard never slept.
    pub fn sleepiest_minute(&self) -> Option<(u32, u32)> {
        let (minute, count) = self
            .per_minute
            .iter()
            .enumerate()
            .fold((0usize, 0u32), |best, (m, &c)| if c > best.1 { (m, c) } else { best });

        (count > 0).then_some((minute as u32, count))
    }

    pub fn count_at(&self, minute: u32) -> u32 {
        self.per_minute.get(minute as usize).copied().unwrap_or(0)
    }
}

/// Expand every asleep → next-entry pair of each day of the guard.
/// The last entry of a day has no successor and contributes nothing.
pub fn build_occupancy(guard: &Guard) -> Occupancy {
    guard
        .logs_by_day
        .values()
        .fold(Occupancy::default(), |mut occ, logs| {
            add_day(&mut occ, logs);
            occ
        })
}

fn add_day(occ: &mut Occupancy, logs: &[Log]) {
    for pair in logs.windows(2) {
        if pair[0].state.is_asleep() {
            occ.add_interval(pair[0].minute(), pair[1].minute());
        }
    }
}
