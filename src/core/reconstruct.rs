//! Chronological reconstruction: sort parsed events, resolve the guard each
//! one belongs to and group the result per guard and per calendar day.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, GuardId};
use crate::models::guard::{Guard, Roster};
use crate::models::log::Log;
use tracing::debug;

/// Stable chronological sort: events sharing a minute keep their input order.
pub fn sort_events(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|e| e.timestamp);
    events
}

/// Attach a guard to every event by carrying the last shift marker forward.
///
/// A shift marker becomes an `Awake` log of the incoming guard, which seeds
/// that guard's day. A sleep/wake event seen before any marker is an error.
pub fn resolve_guards(sorted: &[Event]) -> AppResult<Vec<Log>> {
    let (logs, _) = sorted.iter().try_fold(
        (Vec::with_capacity(sorted.len()), None::<GuardId>),
        |(mut logs, current), ev| {
            let guard_id = match ev.guard_id.or(current) {
                Some(id) => id,
                None => return Err(AppError::UnresolvedGuard { line: ev.line }),
            };

            logs.push(Log::new(guard_id, ev.timestamp, ev.state));
            Ok((logs, Some(guard_id)))
        },
    )?;

    Ok(logs)
}

/// Group resolved logs by guard. Input must already be chronological.
pub fn build_roster(logs: Vec<Log>) -> Roster {
    let roster = logs.into_iter().fold(Roster::new(), |mut roster, log| {
        roster
            .entry(log.guard_id)
            .or_insert_with(|| Guard::new(log.guard_id))
            .push(log);
        roster
    });

    debug!(guards = roster.len(), "roster built");
    roster
}

/// Sort, resolve and group in one step.
pub fn reconstruct(events: Vec<Event>) -> AppResult<Roster> {
    let sorted = sort_events(events);
    let logs = resolve_guards(&sorted)?;
    Ok(build_roster(logs))
}
