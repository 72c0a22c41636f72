use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::ingest;
use crate::models::{ShiftType, Visit};
use crate::ui::messages::header;
use crate::utils::formatting::{describe_shift, team_or_placeholder};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        shift,
        team,
        range,
        summary,
    } = cmd
    {
        let collection = expand_tilde(&cfg.collection);
        let visits = ingest::load_visits(&collection)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) => Some(parse_range(r)?),
        };

        let selected: Vec<&Visit> = visits
            .iter()
            .filter(|v| match shift {
                None => true,
                Some(f) => v.shift_type == f.shift_type(),
            })
            .filter(|v| match team {
                None => true,
                Some(t) => v.team == *t,
            })
            .filter(|v| match bounds {
                None => true,
                Some((start, end)) => v
                    .parsed_shift_date()
                    .is_some_and(|d| d >= start && d <= end),
            })
            .collect();

        if selected.is_empty() {
            println!("No visits to show.");
        } else {
            print_visit_rows(&selected, cfg);
        }

        if *summary {
            print_summary(&visits);
        }
    }

    Ok(())
}

/// Render the standard visit table (used by `list` and `classify --print`).
pub(crate) fn print_visits(visits: &[Visit], cfg: &Config) {
    let refs: Vec<&Visit> = visits.iter().collect();
    if refs.is_empty() {
        println!("No visits to show.");
    } else {
        print_visit_rows(&refs, cfg);
    }
}

fn print_visit_rows(visits: &[&Visit], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 36),
        Column::new("DATE", 10),
        Column::new("TIME", 8),
        Column::new("LOCATION", 24),
        Column::new("SHIFT DATE", 10),
        Column::new("SHIFT", 7),
        Column::new("TEAM", 12),
    ])
    .with_separator(cfg.separator());

    for v in visits {
        table.add_row(vec![
            v.id.to_string(),
            v.date.clone(),
            v.time.clone(),
            v.location.clone(),
            v.shift_date.clone(),
            v.shift_type.st_as_str().to_string(),
            team_or_placeholder(&v.team),
        ]);
    }

    print!("{}", table.render());
}

fn print_summary(visits: &[Visit]) {
    let summary = Core::build_summary(visits);

    header("Summary");
    println!("Visits:     {}", summary.total);

    let (day_label, day_colour) = describe_shift(ShiftType::Diurno);
    println!(
        "{:<11} {}",
        format!("{day_label}:"),
        day_colour.paint(summary.day.to_string())
    );

    let (night_label, night_colour) = describe_shift(ShiftType::Noturno);
    println!(
        "{:<11} {}",
        format!("{night_label}:"),
        night_colour.paint(summary.night.to_string())
    );

    println!("Unassigned: {}", summary.unassigned);

    for (team, count) in &summary.per_team {
        println!("Team {:<12} {}", team, count);
    }
}
