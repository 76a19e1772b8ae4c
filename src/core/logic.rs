use crate::core::calculator::occupancy::{Occupancy, build_occupancy};
use crate::core::calculator::queries::{QueryResult, most_asleep_guard, most_frequent_minute};
use crate::core::{parser, reconstruct};
use crate::errors::AppResult;
use crate::models::event::GuardId;
use crate::models::guard::Roster;
use serde::Serialize;
use std::io::BufRead;
use tracing::info;

/// The two answers of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub most_asleep: QueryResult,
    pub most_frequent: QueryResult,
}

/// Per-guard overview used by `guards` and `export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardSummary {
    pub guard_id: GuardId,
    pub days: usize,
    pub total_minutes: u32,
    pub sleepiest_minute: Option<u32>,
    pub times_at_minute: u32,
    pub occupancy: Occupancy,
}

pub struct Core;

impl Core {
    /// Parse and reconstruct a log into its roster of guards.
    pub fn build_roster<I, S>(lines: I) -> AppResult<Roster>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let events = parser::parse_lines(lines)?;
        info!(events = events.len(), "log parsed");
        reconstruct::reconstruct(events)
    }

    pub fn report(roster: &Roster) -> Report {
        let report = Report {
            most_asleep: most_asleep_guard(roster),
            most_frequent: most_frequent_minute(roster),
        };
        info!(?report, "queries done");
        report
    }

    /// Full pipeline: raw lines → report. Any parse failure aborts the run.
    pub fn analyze_lines<I, S>(lines: I) -> AppResult<Report>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Self::build_roster(lines)?;
        Ok(Self::report(&roster))
    }

    pub fn analyze_reader<R: BufRead>(reader: R) -> AppResult<Report> {
        let lines = crate::core::input::read_lines_from(reader)?;
        Self::analyze_lines(lines)
    }

    pub fn guard_summaries(roster: &Roster) -> Vec<GuardSummary> {
        roster
            .values()
            .map(|guard| {
                let occupancy = build_occupancy(guard);
                let best = occupancy.sleepiest_minute();
                GuardSummary {
                    guard_id: guard.id,
                    days: guard.days(),
                    total_minutes: occupancy.total_minutes,
                    sleepiest_minute: best.map(|(m, _)| m),
                    times_at_minute: best.map(|(_, c)| c).unwrap_or(0),
                    occupancy,
                }
            })
            .collect()
    }
}
