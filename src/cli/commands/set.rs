use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::errors::{AppError, AppResult};
use crate::ingest;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use uuid::Uuid;

/// Manual single-field update of one visit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { id, field, value } = cmd {
        let id = Uuid::parse_str(id).map_err(|_| AppError::InvalidId(id.clone()))?;

        let collection = expand_tilde(&cfg.collection);
        let mut visits = ingest::load_visits(&collection)?;

        UpdateLogic::update(&mut visits, id, *field, value)?;
        ingest::save_visits(&collection, &visits)?;

        success(format!("Updated {} of visit {id}", field.vf_as_str()));
    }

    Ok(())
}
