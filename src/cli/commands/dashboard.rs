use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::core::filter::FilterSet;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

/// Render the damage dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        teams,
        zones,
        damage_types,
    } = cmd
    {
        let filters = FilterSet::from_labels(teams, zones, damage_types)?;
        let store = RecordStore::new(expand_tilde(&cfg.data_file));

        DashboardLogic::render(&store, &filters, cfg.top_products)?;
    }

    Ok(())
}
