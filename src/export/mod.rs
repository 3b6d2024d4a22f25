// src/export/mod.rs

mod fs_utils;
pub mod logic;

pub use logic::{ExportLogic, Exporter};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Default output name for a dashboard download.
pub const DEFAULT_EXPORT_FILE: &str = "filtered_damage_report.csv";

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
