//! The two aggregate queries over a roster.
//!
//! Guards are visited in ascending id order and a candidate only replaces the
//! current best on a strictly greater score, so ties go to the lowest guard
//! id, then to the lowest minute.

use super::occupancy::build_occupancy;
use crate::models::event::GuardId;
use crate::models::guard::Roster;
use serde::Serialize;

/// Winner of a query. The all-zero default means "no sleep recorded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub guard_id: GuardId,
    pub minute: u32,
    /// Total asleep minutes or times asleep at `minute`, depending on the query.
    pub score: u32,
}

impl QueryResult {
    /// Scalar answer reported to the user: guard id × minute.
    pub fn answer(&self) -> u64 {
        u64::from(self.guard_id) * u64::from(self.minute)
    }

    pub fn is_empty(&self) -> bool {
        self.score == 0
    }
}

/// Guard with the most total minutes asleep, paired with its sleepiest minute.
pub fn most_asleep_guard(roster: &Roster) -> QueryResult {
    roster
        .values()
        .fold(QueryResult::default(), |best, guard| {
            let occ = build_occupancy(guard);
            match occ.sleepiest_minute() {
                Some((minute, _)) if occ.total_minutes > best.score => QueryResult {
                    guard_id: guard.id,
                    minute,
                    score: occ.total_minutes,
                },
                _ => best,
            }
        })
}

/// Guard/minute pair asleep on the most distinct days.
pub fn most_frequent_minute(roster: &Roster) -> QueryResult {
    roster
        .values()
        .fold(QueryResult::default(), |best, guard| {
            match build_occupancy(guard).sleepiest_minute() {
                Some((minute, times)) if times > best.score => QueryResult {
                    guard_id: guard.id,
                    minute,
                    score: times,
                },
                _ => best,
            }
        })
}
