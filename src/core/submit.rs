use crate::core::validate;
use crate::errors::AppResult;
use crate::models::DamageReport;
use crate::store::RecordStore;

/// High-level business logic for the `submit` command.
pub struct SubmitLogic;

impl SubmitLogic {
    /// Validate the candidate and append it to the store.
    /// A validation failure aborts before anything is written.
    pub fn apply(store: &RecordStore, report: &DamageReport) -> AppResult<()> {
        validate::validate(report)?;

        store.ensure_initialized()?;
        store.append(report)?;

        Ok(())
    }
}
