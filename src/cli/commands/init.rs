use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Initialize the configuration file and an empty damage log.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data.clone(), cli.test)?;
    Ok(())
}
