//! Event parser: one raw duty-log line → one [`Event`].
//!
//! Expected shape: `[YYYY-MM-DD HH:MM] <text>` where `<text>` is one of
//! `Guard #<id> begins shift`, `falls asleep` or `wakes up`.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, GuardId};
use crate::models::sleep_state::SleepState;
use crate::models::timestamp::Timestamp;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<stamp>[^\]]*)\]\s*(?P<text>.*)$").expect("valid line regex")
});

static GUARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Guard\s+#(?P<id>\S+)").expect("valid guard regex"));

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a single line. `line_no` is 1-based and only used for diagnostics.
pub fn parse_line(line_no: usize, raw: &str) -> AppResult<Event> {
    let raw = raw.trim();

    let caps = LINE_RE
        .captures(raw)
        .ok_or_else(|| AppError::malformed(line_no, raw, "expected `[YYYY-MM-DD HH:MM] text`"))?;

    let stamp = caps["stamp"].trim();
    let text = caps["text"].trim();

    let dt = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT)
        .map_err(|e| AppError::malformed(line_no, raw, format!("bad timestamp '{stamp}': {e}")))?;

    let guard_id = parse_guard_id(line_no, raw, text)?;
    let state = SleepState::from_text(text);

    let event = Event::new(line_no, Timestamp::from(dt), state, guard_id);
    trace!(line = line_no, ?event, "parsed event");
    Ok(event)
}

/// Parse every non-blank line, stopping at the first malformed one.
pub fn parse_lines<I, S>(lines: I) -> AppResult<Vec<Event>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut events = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        events.push(parse_line(idx + 1, line)?);
    }

    Ok(events)
}

fn parse_guard_id(line_no: usize, raw: &str, text: &str) -> AppResult<Option<GuardId>> {
    match GUARD_RE.captures(text) {
        Some(caps) => {
            let digits = &caps["id"];
            digits
                .parse::<GuardId>()
                .map(Some)
                .map_err(|e| AppError::malformed(line_no, raw, format!("bad guard id '{digits}': {e}")))
        }
        None if text.contains("Guard") => Err(AppError::malformed(
            line_no,
            raw,
            "guard marker without `#<id>`",
        )),
        None => Ok(None),
    }
}
