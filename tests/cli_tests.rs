mod common;
use common::{SAMPLE_LOG, sw_isolated, temp_path, write_log};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_analyze_from_stdin() {
    sw_isolated("analyze_stdin")
        .arg("analyze")
        .write_stdin(SAMPLE_LOG)
        .assert()
        .success()
        .stdout(predicate::str::contains("Most minutes asleep: 240"))
        .stdout(predicate::str::contains("Most frequent minute: 4455"));
}

#[test]
fn test_analyze_from_shuffled_file() {
    let mut lines: Vec<&str> = SAMPLE_LOG.lines().collect();
    lines.reverse();
    let log = write_log("analyze_file", &lines.join("\n"));

    sw_isolated("analyze_file")
        .args(["analyze", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("240 (guard #10 at 00:24, 50 min total)"))
        .stdout(predicate::str::contains("4455 (guard #99 at 00:45, 3 days)"));
}

#[test]
fn test_analyze_json() {
    let output = sw_isolated("analyze_json")
        .args(["analyze", "--json", "-"])
        .write_stdin(SAMPLE_LOG)
        .output()
        .expect("run analyze --json");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(value["most_asleep"]["guard_id"], 10);
    assert_eq!(value["most_asleep"]["minute"], 24);
    assert_eq!(value["most_frequent"]["guard_id"], 99);
    assert_eq!(value["most_frequent"]["score"], 3);
}

#[test]
fn test_analyze_empty_input_reports_zero() {
    sw_isolated("analyze_empty")
        .arg("analyze")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most minutes asleep: 0 (no sleep recorded)"));
}

#[test]
fn test_malformed_line_fails_the_run() {
    sw_isolated("analyze_malformed")
        .arg("analyze")
        .write_stdin("[1518-11-01 00:00] Guard #10 begins shift\nnot a log line\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed line 2"));
}

#[test]
fn test_unresolved_guard_fails_the_run() {
    sw_isolated("analyze_unresolved")
        .arg("analyze")
        .write_stdin("[1518-11-01 00:05] falls asleep\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("before any guard began a shift"));
}

#[test]
fn test_missing_input_file() {
    sw_isolated("analyze_missing")
        .args(["analyze", &temp_path("does_not_exist", "log")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_guards_table_sorted_by_frequency() {
    let output = sw_isolated("guards_sorted")
        .args(["guards", "--sort", "frequency"])
        .write_stdin(SAMPLE_LOG)
        .output()
        .expect("run guards");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<&str> = stdout
        .lines()
        .filter(|l| l.trim_start().starts_with('#'))
        .collect();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("#99"));
    assert!(rows[0].contains("00:45"));
    assert!(rows[1].contains("#10"));
    assert!(rows[1].contains("00h 50m"));
}

#[test]
fn test_guards_chart() {
    sw_isolated("guards_chart")
        .args(["guards", "--chart"])
        .write_stdin(SAMPLE_LOG)
        .assert()
        .success()
        .stdout(predicate::str::contains(".....111111111111111111121111.1111111111111111111111111....."));
}

#[test]
fn test_export_csv_and_json() {
    let log = write_log("export_log", SAMPLE_LOG);

    let csv_out = temp_path("export_guards", "csv");
    sw_isolated("export_csv")
        .args(["export", &log, "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).expect("read csv");
    let mut lines = csv.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("guard_id,days,total_minutes,sleepiest_minute,times_at_minute,m00"));
    assert!(header.ends_with("m59"));
    assert!(lines.next().expect("row").starts_with("10,2,50,24,2,"));
    assert!(lines.next().expect("row").starts_with("99,4,30,45,3,"));

    let json_out = temp_path("export_guards", "json");
    sw_isolated("export_json")
        .args(["export", &log, "--format", "json", "--file", &json_out])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).expect("json");
    assert_eq!(value[0]["guard_id"], 10);
    assert_eq!(value[0]["per_minute"].as_array().map(Vec::len), Some(60));
    assert_eq!(value[1]["per_minute"][45], 3);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let log = write_log("export_force_log", SAMPLE_LOG);
    let out = temp_path("export_force", "csv");
    fs::write(&out, "keep me").expect("seed file");

    sw_isolated("export_force")
        .args(["export", &log, "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    sw_isolated("export_force")
        .args(["export", &log, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("guard_id"));
}

#[test]
fn test_config_default_input_and_json_format() {
    let log = write_log("config_input_log", SAMPLE_LOG);
    let cfg = temp_path("config_input", "conf");
    fs::write(
        &cfg,
        format!("default_input: {log}\noutput_format: json\ncolor: false\n"),
    )
    .expect("write config");

    common::sw()
        .args(["--config", &cfg, "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"most_asleep\""));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = temp_path("config_invalid", "conf");
    fs::write(&cfg, "output_format: xml\n").expect("write config");

    common::sw()
        .args(["--config", &cfg, "analyze"])
        .write_stdin(SAMPLE_LOG)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_path("config_init", "conf");

    common::sw()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(!std::path::Path::new(&cfg).exists());

    common::sw().args(["--config", &cfg, "init"]).assert().success();
    let written = fs::read_to_string(&cfg).expect("config written");
    assert!(written.contains("output_format: text"));

    common::sw()
        .args(["--config", &cfg, "config", "--print", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log_level: warn"))
        .stdout(predicate::str::contains(cfg.as_str()));
}
