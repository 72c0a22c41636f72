use crate::cli::commands::list::print_visits;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::enrich::EnrichLogic;
use crate::errors::AppResult;
use crate::ingest;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Ingest an extracted CSV, classify each row and update the collection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify {
        input,
        replace,
        print,
    } = cmd
    {
        //
        // 1. Read raw visits from the extraction output
        //
        let input_path = expand_tilde(input);
        let raw = ingest::read_raw_csv(&input_path)?;

        //
        // 2. Enrich (strict: one malformed record fails the whole batch,
        //    leaving the collection file untouched)
        //
        let enriched = EnrichLogic::enrich(&raw)?;
        let added = enriched.len();

        //
        // 3. Merge into the working collection and persist
        //
        let collection = expand_tilde(&cfg.collection);
        let mut visits = if *replace {
            Vec::new()
        } else {
            ingest::load_visits(&collection)?
        };
        visits.extend(enriched);

        ingest::save_visits(&collection, &visits)?;

        success(format!(
            "Classified {added} visit(s); collection now holds {}",
            visits.len()
        ));

        if *print {
            print_visits(&visits, cfg);
        }
    }

    Ok(())
}
