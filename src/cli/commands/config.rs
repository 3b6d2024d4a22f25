use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;

/// View the active configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            info("Nothing to do. Try 'damagelog config --print'.");
            return Ok(());
        }

        let path = Config::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            println!("📄 Configuration file: {}\n", path.display());
            println!("{content}");
        } else {
            info("No config file found; showing defaults.");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
