use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterSet;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

/// Export the (filtered) damage log to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        teams,
        zones,
        damage_types,
    } = cmd
    {
        let filters = FilterSet::from_labels(teams, zones, damage_types)?;
        let store = RecordStore::new(expand_tilde(&cfg.data_file));

        ExportLogic::export(&store, format.clone(), file, &filters, *force)?;
    }

    Ok(())
}
