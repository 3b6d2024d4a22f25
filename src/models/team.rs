use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Receiving,
    Shipping,
    Stocking,
    Replens,
    Unknown,
}

impl Team {
    pub const ALL: [Team; 5] = [
        Team::Receiving,
        Team::Shipping,
        Team::Stocking,
        Team::Replens,
        Team::Unknown,
    ];

    /// Label as written in the damage log (CSV column value).
    pub fn label(&self) -> &'static str {
        match self {
            Team::Receiving => "Receiving",
            Team::Shipping => "Shipping",
            Team::Stocking => "Stocking",
            Team::Replens => "Replens",
            Team::Unknown => "Unknown",
        }
    }

    /// Helper: convert input from the CLI (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.label().to_lowercase() == norm)
    }
}
