use super::{sleep_state::SleepState, timestamp::Timestamp};
use serde::Serialize;

pub type GuardId = u32;

/// One parsed line of the duty log, before the guard is resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub line: usize,         // 1-based line number in the input
    pub timestamp: Timestamp,
    pub state: SleepState,
    pub guard_id: Option<GuardId>, // only on "begins shift" lines
}

impl Event {
    pub fn new(
        line: usize,
        timestamp: Timestamp,
        state: SleepState,
        guard_id: Option<GuardId>,
    ) -> Self {
        Self {
            line,
            timestamp,
            state,
            guard_id,
        }
    }

    pub fn is_shift_start(&self) -> bool {
        self.guard_id.is_some()
    }
}
