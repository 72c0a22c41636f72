use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ingest;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        range,
        force,
    } = cmd
    {
        let collection = expand_tilde(&cfg.collection);
        let visits = ingest::load_visits(&collection)?;

        ExportLogic::export(&visits, format.clone(), out, range, *force)?;
    }

    Ok(())
}
