use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum SleepState {
    Awake,
    Asleep,
}

impl SleepState {
    /// Classify the free text of a log line: anything mentioning "asleep"
    /// is a sleep event, everything else (wake ups, shift starts) is awake.
    pub fn from_text(text: &str) -> Self {
        if text.contains("asleep") {
            SleepState::Asleep
        } else {
            SleepState::Awake
        }
    }

    pub fn is_asleep(&self) -> bool {
        matches!(self, SleepState::Asleep)
    }
}
