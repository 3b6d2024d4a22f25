use crate::errors::{AppError, AppResult};
use crate::models::DamageReport;

/// Check a candidate report before it reaches the store.
///
/// The enumerated fields (damage type, zone, team) are constrained by the CLI
/// parser, so only the free-text and numeric fields are enforced here. Pure
/// and side-effect free; a rejected report is never partially persisted.
pub fn validate(report: &DamageReport) -> AppResult<()> {
    if report.sku.is_empty() {
        return Err(AppError::Validation("SKU is required".to_string()));
    }

    if report.product.is_empty() {
        return Err(AppError::Validation("Product name is required".to_string()));
    }

    if report.quantity < 1 {
        return Err(AppError::Validation(format!(
            "Quantity must be at least 1 (got {})",
            report.quantity
        )));
    }

    Ok(())
}
