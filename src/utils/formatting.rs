//! Formatting utilities used for CLI and export outputs.

/// 125 → "02h 05m"
pub fn mins2readable(mins: u32) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// Minute of the midnight hour as "00:MM", or "--:--" when absent.
pub fn minute_label(minute: Option<u32>) -> String {
    match minute {
        Some(m) => format!("00:{:02}", m),
        None => "--:--".to_string(),
    }
}

/// One character per minute: '.' never asleep, '1'..'9' days asleep, '#' for ten or more.
pub fn minute_strip(per_minute: &[u32]) -> String {
    per_minute
        .iter()
        .map(|&c| match c {
            0 => '.',
            1..=9 => char::from_digit(c, 10).unwrap_or('#'),
            _ => '#',
        })
        .collect()
}

/// Column header matching [`minute_strip`]: a label every ten minutes.
pub fn minute_ruler() -> String {
    (0..60)
        .step_by(10)
        .map(|m| format!("{:<10}", format!("{:02}", m)))
        .collect::<String>()
        .trim_end()
        .to_string()
}
