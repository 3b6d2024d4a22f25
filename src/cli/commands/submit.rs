use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{DamageReport, DamageType, StorageZone, Team};
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Submit a new damage report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        date: date_arg,
        sku,
        product,
        quantity,
        damage,
        zone,
        team,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Parse enumerated fields
        //
        let damage_final = DamageType::from_label(damage).ok_or_else(|| {
            AppError::InvalidDamageType(format!(
                "'{}'. Use one of: crushed, leaking, broken-packaging, spoiled, other",
                damage
            ))
        })?;

        let zone_final = StorageZone::from_label(zone).ok_or_else(|| {
            AppError::InvalidZone(format!(
                "'{}'. Use one of: dry, cooler, freezer, loading-dock",
                zone
            ))
        })?;

        let team_final = Team::from_label(team).ok_or_else(|| {
            AppError::InvalidTeam(format!(
                "'{}'. Use one of: receiving, shipping, stocking, replens, unknown",
                team
            ))
        })?;

        //
        // 3. Build the candidate report
        //
        let report = DamageReport::new(
            d,
            sku.clone(),
            product.clone(),
            *quantity,
            damage_final,
            zone_final,
            team_final,
            notes.clone(),
        );

        //
        // 4. Validate and append; a rejected report is a warning, not a crash
        //
        let store = RecordStore::new(expand_tilde(&cfg.data_file));
        match SubmitLogic::apply(&store, &report) {
            Ok(()) => success("Damage report submitted and saved!"),
            Err(AppError::Validation(reason)) => {
                warning(format!("Please fill out all required fields: {reason}."));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
