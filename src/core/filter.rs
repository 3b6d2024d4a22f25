use crate::errors::{AppError, AppResult};
use crate::models::{DamageReport, DamageType, StorageZone, Team};

/// Caller-selected subsets for narrowing the damage log.
///
/// An empty subset means "no filter" for that dimension; the three dimensions
/// are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub teams: Vec<Team>,
    pub zones: Vec<StorageZone>,
    pub damage_types: Vec<DamageType>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.zones.is_empty() && self.damage_types.is_empty()
    }

    /// Build a filter set from raw CLI labels.
    pub fn from_labels(teams: &[String], zones: &[String], damage_types: &[String]) -> AppResult<Self> {
        let mut set = FilterSet::default();

        for t in teams {
            let team =
                Team::from_label(t).ok_or_else(|| AppError::InvalidTeam(t.to_string()))?;
            set.teams.push(team);
        }

        for z in zones {
            let zone =
                StorageZone::from_label(z).ok_or_else(|| AppError::InvalidZone(z.to_string()))?;
            set.zones.push(zone);
        }

        for d in damage_types {
            let damage = DamageType::from_label(d)
                .ok_or_else(|| AppError::InvalidDamageType(d.to_string()))?;
            set.damage_types.push(damage);
        }

        Ok(set)
    }

    fn matches(&self, row: &DamageReport) -> bool {
        (self.teams.is_empty() || self.teams.contains(&row.team))
            && (self.zones.is_empty() || self.zones.contains(&row.zone))
            && (self.damage_types.is_empty() || self.damage_types.contains(&row.damage_type))
    }
}

/// Narrow a table to the rows matching `filters`. Returns a new table and
/// never mutates the input; an empty result is a valid outcome, not an error.
/// With an empty filter set this is the identity over rows and order.
pub fn apply(table: &[DamageReport], filters: &FilterSet) -> Vec<DamageReport> {
    table
        .iter()
        .filter(|row| filters.matches(row))
        .cloned()
        .collect()
}
