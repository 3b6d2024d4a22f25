use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Crushed,
    Leaking,
    #[serde(rename = "Broken Packaging")]
    BrokenPackaging,
    Spoiled,
    Other,
}

impl DamageType {
    pub const ALL: [DamageType; 5] = [
        DamageType::Crushed,
        DamageType::Leaking,
        DamageType::BrokenPackaging,
        DamageType::Spoiled,
        DamageType::Other,
    ];

    /// Label as written in the damage log (CSV column value).
    pub fn label(&self) -> &'static str {
        match self {
            DamageType::Crushed => "Crushed",
            DamageType::Leaking => "Leaking",
            DamageType::BrokenPackaging => "Broken Packaging",
            DamageType::Spoiled => "Spoiled",
            DamageType::Other => "Other",
        }
    }

    /// Helper: convert input from the CLI (case-insensitive, `-`/`_` accepted
    /// in place of spaces, e.g. `broken-packaging`).
    pub fn from_label(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|d| d.label().to_lowercase() == norm)
    }
}
