//! CSV-backed record store for damage reports.
//!
//! The store owns the persisted table: an append-only log with a fixed column
//! schema, read in full on every use. Appends are read-modify-write over the
//! whole file. Known limitation: there is no locking, so concurrent external
//! writers can race (last write wins); the target deployment is single-process
//! with low-frequency submissions.

pub mod schema;

use crate::errors::{AppError, AppResult};
use crate::models::DamageReport;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the containing directory and a header-only log file if the
    /// store does not exist yet. Idempotent.
    pub fn ensure_initialized(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !self.path.exists() {
            fs::write(&self.path, format!("{}\n", schema::header_line()))?;
        }

        Ok(())
    }

    /// Read the full table from disk. Any read or parse failure is reported
    /// as `AppError::Storage` so callers can surface it without crashing.
    pub fn load(&self) -> AppResult<Vec<DamageReport>> {
        let mut rdr = csv::Reader::from_path(&self.path).map_err(|e| {
            AppError::Storage(format!("cannot read '{}': {e}", self.path.display()))
        })?;

        let mut rows = Vec::new();
        for record in rdr.deserialize() {
            let report: DamageReport = record.map_err(|e| {
                AppError::Storage(format!("malformed row in '{}': {e}", self.path.display()))
            })?;
            rows.push(report);
        }

        Ok(rows)
    }

    /// Append one report: full read, push, full rewrite.
    /// Not atomic across concurrent writers (see module docs).
    pub fn append(&self, report: &DamageReport) -> AppResult<()> {
        let mut rows = self.load()?;
        rows.push(report.clone());
        self.write_all(&rows)
    }

    fn write_all(&self, rows: &[DamageReport]) -> AppResult<()> {
        let bytes = encode(rows)?;
        fs::write(&self.path, bytes).map_err(|e| {
            AppError::Storage(format!("cannot write '{}': {e}", self.path.display()))
        })
    }
}

/// Serialize a table to the persisted byte format: header row plus one CSV
/// line per record, UTF-8. The output of `encode` round-trips through
/// `RecordStore::load` unchanged, even for an empty table.
pub fn encode(rows: &[DamageReport]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(schema::COLUMNS)
        .map_err(|e| AppError::Storage(format!("CSV header error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Storage(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Storage(format!("CSV flush error: {e}")))
}
