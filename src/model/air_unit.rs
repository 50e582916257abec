use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::roll_hits;
use crate::error::RowError;
use crate::parser::{FieldValue, Record, RowFields};
use crate::schema::{TableSchema, AIR_UNITS};

/// An aircraft type as listed in `WEBasicAirUnits.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirUnit {
    /// e.g. "A6M5 Zero"
    pub unit: String,
    pub nationality: String,
    /// Free-text role tag, e.g. "Fighter", "Fighter/Bomber", "Bomber"
    pub role: String,
    /// "Light", "Medium" or "Heavy"
    pub weight: String,
    pub cost: i32,
    pub air_attack_strength: i32,
    pub bombing_strength: i32,
    pub damage_capacity: i32,
    /// Zones movable per phase
    pub fuel: i32,
    pub year: i32,
    pub special_1: String,
    pub special_2: String,
    pub model_lod0: String,
    pub model_lod1: String,
    pub motor: String,
    pub gun: String,
}

impl AirUnit {
    /// Special ability texts that are present
    pub fn specials(&self) -> impl Iterator<Item = &str> {
        [self.special_1.as_str(), self.special_2.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
    }

    /// Roll air-to-air dice; every 6 is a hit
    pub fn roll_air_attack(&self, rng: &mut impl Rng) -> u32 {
        roll_hits(self.air_attack_strength, rng)
    }
}

impl Record for AirUnit {
    const SCHEMA: &'static TableSchema = &AIR_UNITS;

    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            unit: row.text(0),
            nationality: row.text(1),
            role: row.text(2),
            weight: row.text(3),
            cost: row.int(4)?,
            air_attack_strength: row.int(5)?,
            bombing_strength: row.int(6)?,
            damage_capacity: row.int(7)?,
            fuel: row.int(8)?,
            year: row.int(9)?,
            special_1: row.text(10),
            special_2: row.text(11),
            model_lod0: row.text(12),
            model_lod1: row.text(13),
            motor: row.text(14),
            gun: row.text(15),
        })
    }

    fn key(&self) -> &str {
        &self.unit
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::text(&self.unit),
            FieldValue::text(&self.nationality),
            FieldValue::text(&self.role),
            FieldValue::text(&self.weight),
            self.cost.into(),
            self.air_attack_strength.into(),
            self.bombing_strength.into(),
            self.damage_capacity.into(),
            self.fuel.into(),
            self.year.into(),
            FieldValue::text(&self.special_1),
            FieldValue::text(&self.special_2),
            FieldValue::text(&self.model_lod0),
            FieldValue::text(&self.model_lod1),
            FieldValue::text(&self.motor),
            FieldValue::text(&self.gun),
        ]
    }
}
