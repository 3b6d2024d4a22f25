use super::{damage_type::DamageType, storage_zone::StorageZone, team::Team};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One submitted damage incident. Field renames match the CSV header of the
/// damage log exactly, so serde round-trips rows through the `csv` crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ "Date" column (TEXT "YYYY-MM-DD")
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Product Name")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    #[serde(rename = "Damage Type")]
    pub damage_type: DamageType,
    #[serde(rename = "Storage Zone")]
    pub zone: StorageZone,
    #[serde(rename = "Team")]
    pub team: Team,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl DamageReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        sku: String,
        product: String,
        quantity: i32,
        damage_type: DamageType,
        zone: StorageZone,
        team: Team,
        notes: Option<String>,
    ) -> Self {
        Self {
            date,
            sku,
            product,
            quantity,
            damage_type,
            zone,
            team,
            notes: notes.unwrap_or_default(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
