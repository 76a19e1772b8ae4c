use super::{event::GuardId, sleep_state::SleepState, timestamp::Timestamp};
use serde::Serialize;

/// An event whose guard has been resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Log {
    pub guard_id: GuardId,
    pub timestamp: Timestamp,
    pub state: SleepState,
}

impl Log {
    pub fn new(guard_id: GuardId, timestamp: Timestamp, state: SleepState) -> Self {
        Self {
            guard_id,
            timestamp,
            state,
        }
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute
    }
}
