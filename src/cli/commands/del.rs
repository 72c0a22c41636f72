use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::errors::{AppError, AppResult};
use crate::ingest;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use uuid::Uuid;

/// Delete one visit from the collection, with confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let parsed = Uuid::parse_str(id).map_err(|_| AppError::InvalidId(id.clone()))?;

        let collection = expand_tilde(&cfg.collection);
        let mut visits = ingest::load_visits(&collection)?;

        if !*force && !confirm(id)? {
            info("Deletion cancelled.");
            return Ok(());
        }

        let removed = UpdateLogic::remove(&mut visits, parsed)?;
        ingest::save_visits(&collection, &visits)?;

        success(format!(
            "Deleted visit {} ({} {} @ {})",
            removed.id, removed.date, removed.time, removed.location
        ));
    }

    Ok(())
}

fn confirm(id: &str) -> AppResult<bool> {
    print!("Delete visit {id}? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
