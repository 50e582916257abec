use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::roll_hits;
use crate::error::RowError;
use crate::parser::{FieldValue, Record, RowFields};
use crate::schema::{TableSchema, ZONES};

/// A map zone: the target (city, port, industry) plus its airfield
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub target_name: String,
    pub nationality: String,
    pub domain: String,
    pub aa_strength: i32,
    pub damage_capacity: i32,
    /// Production points
    pub production: i32,
    /// Victory points if undestroyed
    pub vp_value: i32,
    pub facility: Facility,
    pub model: String,
}

/// Ground installation embedded in a zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    /// "Airstrip", "Airfield", "Airbase"
    pub category: String,
    pub aa_strength: i32,
    pub damage_capacity: i32,
}

impl Zone {
    /// Target and facility AA dice fire together
    pub fn combined_aa_strength(&self) -> i32 {
        self.aa_strength.saturating_add(self.facility.aa_strength)
    }

    pub fn roll_anti_aircraft(&self, rng: &mut impl Rng) -> u32 {
        roll_hits(self.combined_aa_strength(), rng)
    }
}

impl Record for Zone {
    const SCHEMA: &'static TableSchema = &ZONES;

    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            target_name: row.text(0),
            nationality: row.text(1),
            domain: row.text(2),
            aa_strength: row.int(3)?,
            damage_capacity: row.int(4)?,
            production: row.int(5)?,
            vp_value: row.int(6)?,
            facility: Facility {
                name: row.text(7),
                category: row.text(8),
                aa_strength: row.int(9)?,
                damage_capacity: row.int(10)?,
            },
            model: row.text(11),
        })
    }

    fn key(&self) -> &str {
        &self.target_name
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::text(&self.target_name),
            FieldValue::text(&self.nationality),
            FieldValue::text(&self.domain),
            self.aa_strength.into(),
            self.damage_capacity.into(),
            self.production.into(),
            self.vp_value.into(),
            FieldValue::text(&self.facility.name),
            FieldValue::text(&self.facility.category),
            self.facility.aa_strength.into(),
            self.facility.damage_capacity.into(),
            FieldValue::text(&self.model),
        ]
    }
}
