use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::{AssignLogic, TeamRoster};
use crate::errors::AppResult;
use crate::ingest;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Bulk team assignment over the working collection. Command-line slots
/// take precedence over the configured ones.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign {
        day_even,
        day_odd,
        night_even,
        night_odd,
    } = cmd
    {
        let configured = cfg.roster();
        let roster = TeamRoster::new(
            day_even.clone().unwrap_or(configured.day_even),
            day_odd.clone().unwrap_or(configured.day_odd),
            night_even.clone().unwrap_or(configured.night_even),
            night_odd.clone().unwrap_or(configured.night_odd),
        );

        if roster.is_empty() {
            warning("No team slots configured. Set them in the config file or pass --day-even/--day-odd/--night-even/--night-odd.");
            return Ok(());
        }

        let collection = expand_tilde(&cfg.collection);
        let mut visits = ingest::load_visits(&collection)?;

        if visits.is_empty() {
            warning("The collection is empty. Run `classify` first.");
            return Ok(());
        }

        let assigned = AssignLogic::assign_teams(&mut visits, &roster);
        ingest::save_visits(&collection, &visits)?;

        success(format!(
            "Assigned teams to {assigned} of {} visit(s)",
            visits.len()
        ));
    }

    Ok(())
}
