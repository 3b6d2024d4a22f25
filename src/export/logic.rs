// src/export/logic.rs

use crate::core::filter::{self, FilterSet};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::models::DamageReport;
use crate::store::{self, RecordStore};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

/// Byte-payload serialization of a table for download.
pub struct Exporter;

impl Exporter {
    /// Serialize the table using the same row/column format as the persisted
    /// store (header + one CSV line per record, UTF-8), so the payload
    /// round-trips through `RecordStore::load` unchanged.
    pub fn to_bytes(rows: &[DamageReport]) -> AppResult<Vec<u8>> {
        store::encode(rows)
    }
}

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the (possibly filtered) damage log.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: path of the output file
    /// - `filters`: same selections the dashboard accepts
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        filters: &FilterSet,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        store.ensure_initialized()?;
        let table = store.load()?;
        let rows = filter::apply(&table, filters);

        if rows.is_empty() {
            warning("⚠️  No reports match the selected filters; nothing exported.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

fn export_csv(rows: &[DamageReport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let bytes = Exporter::to_bytes(rows)?;
    fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("cannot write '{}': {e}", path.display())))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed.
fn export_json(rows: &[DamageReport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json_data.as_bytes())
        .map_err(|e| AppError::Export(format!("cannot write '{}': {e}", path.display())))?;

    notify_export_success("JSON", path);
    Ok(())
}
