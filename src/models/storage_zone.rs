use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageZone {
    Dry,
    Cooler,
    Freezer,
    #[serde(rename = "Loading Dock")]
    LoadingDock,
}

impl StorageZone {
    pub const ALL: [StorageZone; 4] = [
        StorageZone::Dry,
        StorageZone::Cooler,
        StorageZone::Freezer,
        StorageZone::LoadingDock,
    ];

    /// Label as written in the damage log (CSV column value).
    pub fn label(&self) -> &'static str {
        match self {
            StorageZone::Dry => "Dry",
            StorageZone::Cooler => "Cooler",
            StorageZone::Freezer => "Freezer",
            StorageZone::LoadingDock => "Loading Dock",
        }
    }

    /// Helper: convert input from the CLI (case-insensitive, `-`/`_` accepted
    /// in place of spaces, e.g. `loading-dock`).
    pub fn from_label(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|z| z.label().to_lowercase() == norm)
    }
}
