/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

/// Grey out placeholders ("--:--", "00h 00m", "0").
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    let v = value.trim();
    if enabled && (v.is_empty() || v == "--:--" || v == "00h 00m" || v == "0") {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Highlight the row of a query winner.
pub fn highlight(value: &str, enabled: bool) -> String {
    if enabled {
        format!("{YELLOW}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Green when an answer exists, red when the aggregate is empty.
pub fn color_for_answer(answer: u64) -> &'static str {
    if answer > 0 { GREEN } else { RED }
}
