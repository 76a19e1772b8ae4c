use crate::cli::commands::{load_roster, use_color};
use crate::cli::parser::{Cli, Commands, GuardSort};
use crate::config::Config;
use crate::core::logic::{Core, GuardSummary};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_optional, highlight};
use crate::utils::formatting::{mins2readable, minute_label, minute_ruler, minute_strip};
use crate::utils::table::{Align, Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Guards { sort, chart, .. } = &cli.command {
        let roster = load_roster(cli, cfg)?;
        let report = Core::report(&roster);
        let mut summaries = Core::guard_summaries(&roster);

        if summaries.is_empty() {
            warning("No guards found in the log.");
            return Ok(());
        }

        sort_summaries(&mut summaries, *sort);

        let color = use_color(cli, cfg);
        let winners = [report.most_asleep.guard_id, report.most_frequent.guard_id];

        header(format!("{} guards", summaries.len()), color);
        print!("{}", render_table(&summaries, &winners, *chart, color));
    }
    Ok(())
}

/// `Id` is the roster order; the other orders are descending with id as tie-break.
pub fn sort_summaries(summaries: &mut [GuardSummary], sort: GuardSort) {
    match sort {
        GuardSort::Id => summaries.sort_by_key(|s| s.guard_id),
        GuardSort::Total => summaries.sort_by(|a, b| {
            b.total_minutes
                .cmp(&a.total_minutes)
                .then(a.guard_id.cmp(&b.guard_id))
        }),
        GuardSort::Frequency => summaries.sort_by(|a, b| {
            b.times_at_minute
                .cmp(&a.times_at_minute)
                .then(a.guard_id.cmp(&b.guard_id))
        }),
    }
}

pub fn render_table(
    summaries: &[GuardSummary],
    winners: &[u32],
    chart: bool,
    color: bool,
) -> String {
    let mut columns = vec![
        Column::new("GUARD", 6, Align::Right),
        Column::new("DAYS", 4, Align::Right),
        Column::new("ASLEEP", 7, Align::Right),
        Column::new("MINUTE", 6, Align::Left),
        Column::new("TIMES", 5, Align::Right),
    ];
    if chart {
        columns.push(Column::new(&minute_ruler(), 60, Align::Left));
    }

    let mut table = Table::new(columns);

    for s in summaries {
        let id = format!("#{}", s.guard_id);
        let id = if s.total_minutes > 0 && winners.contains(&s.guard_id) {
            highlight(&id, color)
        } else {
            id
        };

        let mut row = vec![
            id,
            s.days.to_string(),
            colorize_optional(&mins2readable(s.total_minutes), color),
            colorize_optional(&minute_label(s.sleepiest_minute), color),
            colorize_optional(&s.times_at_minute.to_string(), color),
        ];
        if chart {
            row.push(minute_strip(&s.occupancy.per_minute));
        }
        table.add_row(row);
    }

    table.render()
}
