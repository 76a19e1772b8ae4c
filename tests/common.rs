#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Sample duty log, already in chronological order.
/// Guard #10 sleeps the most (50 min, minute 24); guard #99 is asleep at
/// minute 45 on three days.
pub const SAMPLE_LOG: &str = "\
[1518-11-01 00:00] Guard #10 begins shift
[1518-11-01 00:05] falls asleep
[1518-11-01 00:25] wakes up
[1518-11-01 00:30] falls asleep
[1518-11-01 00:55] wakes up
[1518-11-01 23:58] Guard #99 begins shift
[1518-11-02 00:40] falls asleep
[1518-11-02 00:50] wakes up
[1518-11-03 00:05] Guard #10 begins shift
[1518-11-03 00:24] falls asleep
[1518-11-03 00:29] wakes up
[1518-11-04 00:02] Guard #99 begins shift
[1518-11-04 00:36] falls asleep
[1518-11-04 00:46] wakes up
[1518-11-05 00:03] Guard #99 begins shift
[1518-11-05 00:45] falls asleep
[1518-11-05 00:55] wakes up
";

pub const SAMPLE_MOST_ASLEEP: u64 = 240;
pub const SAMPLE_MOST_FREQUENT: u64 = 4455;

pub fn sample_lines() -> Vec<String> {
    SAMPLE_LOG.lines().map(str::to_string).collect()
}

/// Deterministic permutations of the sample: reversed, rotated, interleaved.
pub fn shuffled_samples() -> Vec<Vec<String>> {
    let lines = sample_lines();

    let mut reversed = lines.clone();
    reversed.reverse();

    let mut rotated = lines.clone();
    rotated.rotate_left(7);

    let (even, odd): (Vec<_>, Vec<_>) = lines
        .iter()
        .cloned()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    let interleaved = odd
        .into_iter()
        .chain(even)
        .map(|(_, l)| l)
        .collect::<Vec<_>>();

    vec![lines, reversed, rotated, interleaved]
}

pub fn sw() -> Command {
    cargo_bin_cmd!("sleepwatch")
}

/// Command with an isolated (missing) config file and no colors.
pub fn sw_isolated(name: &str) -> Command {
    let cfg = temp_path(name, "conf");
    let mut cmd = sw();
    cmd.args(["--config", &cfg, "--no-color"]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sleepwatch.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path.
pub fn write_log(name: &str, content: &str) -> String {
    let path = temp_path(name, "log");
    fs::write(&path, content).expect("write log file");
    path
}
