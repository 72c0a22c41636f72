use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy();

        if *print_config {
            return ConfigLogic::print(&path_str);
        }

        if *check {
            return ConfigLogic::check(&path_str);
        }

        if *edit_config {
            return ConfigLogic::edit(&path_str, editor);
        }

        info(format!("Config file: {}", path.display()));
    }

    Ok(())
}
