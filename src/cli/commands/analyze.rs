use crate::cli::commands::{load_roster, use_color};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::queries::QueryResult;
use crate::core::logic::{Core, Report};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_answer};
use crate::utils::formatting::minute_label;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { json, .. } = &cli.command {
        let roster = load_roster(cli, cfg)?;
        let report = Core::report(&roster);

        if *json || cfg.wants_json() {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{out}");
        } else {
            print!("{}", render_report(&report, use_color(cli, cfg)));
        }
    }
    Ok(())
}

/// Text report: one line per query, answer first.
pub fn render_report(report: &Report, color: bool) -> String {
    format!(
        "{}\n{}\n",
        render_line("Most minutes asleep", &report.most_asleep, "min total", color),
        render_line("Most frequent minute", &report.most_frequent, "days", color),
    )
}

fn render_line(label: &str, r: &QueryResult, unit: &str, color: bool) -> String {
    let answer = r.answer();
    let value = if color {
        format!("{}{}{}", color_for_answer(answer), answer, RESET)
    } else {
        answer.to_string()
    };

    if r.is_empty() {
        return format!("{label}: {value} (no sleep recorded)");
    }

    format!(
        "{label}: {value} (guard #{} at {}, {} {unit})",
        r.guard_id,
        minute_label(Some(r.minute)),
        r.score
    )
}
