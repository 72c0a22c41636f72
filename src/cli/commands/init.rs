use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Create the configuration directory, config file and empty collection.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test).map_err(AppError::from)
}
