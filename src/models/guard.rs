use super::{day_key::DayKey, event::GuardId, log::Log};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    pub id: GuardId,
    pub logs_by_day: HashMap<DayKey, Vec<Log>>,
}

impl Guard {
    pub fn new(id: GuardId) -> Self {
        Self {
            id,
            logs_by_day: HashMap::new(),
        }
    }

    /// Append a log to its calendar day. Callers push in chronological order.
    pub fn push(&mut self, log: Log) {
        self.logs_by_day
            .entry(log.timestamp.day_key())
            .or_default()
            .push(log);
    }

    pub fn days(&self) -> usize {
        self.logs_by_day.len()
    }

    pub fn logs_for(&self, day: DayKey) -> &[Log] {
        self.logs_by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// All guards seen in a log, ordered by id.
pub type Roster = BTreeMap<GuardId, Guard>;
