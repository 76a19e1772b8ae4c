// src/export/model.rs

use crate::core::logic::GuardSummary;
use serde::Serialize;

/// Flat per-guard record used by the exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GuardExport {
    pub guard_id: u32,
    pub days: usize,
    pub total_minutes: u32,
    pub sleepiest_minute: Option<u32>,
    pub times_at_minute: u32,
    pub per_minute: Vec<u32>,
}

impl From<&GuardSummary> for GuardExport {
    fn from(s: &GuardSummary) -> Self {
        Self {
            guard_id: s.guard_id,
            days: s.days,
            total_minutes: s.total_minutes,
            sleepiest_minute: s.sleepiest_minute,
            times_at_minute: s.times_at_minute,
            per_minute: s.occupancy.per_minute.to_vec(),
        }
    }
}

/// CSV header: fixed columns followed by `m00`..`m59`.
pub(crate) fn get_headers() -> Vec<String> {
    let mut headers: Vec<String> = [
        "guard_id",
        "days",
        "total_minutes",
        "sleepiest_minute",
        "times_at_minute",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    headers.extend((0..60).map(|m| format!("m{:02}", m)));
    headers
}

/// Convert a record into a CSV row.
pub(crate) fn guard_to_row(g: &GuardExport) -> Vec<String> {
    let mut row = vec![
        g.guard_id.to_string(),
        g.days.to_string(),
        g.total_minutes.to_string(),
        g.sleepiest_minute.map(|m| m.to_string()).unwrap_or_default(),
        g.times_at_minute.to_string(),
    ];
    row.extend(g.per_minute.iter().map(u32::to_string));
    row
}
