use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::roll_hits;
use crate::error::RowError;
use crate::parser::{FieldValue, Record, RowFields};
use crate::schema::{TableSchema, ANTI_AIRCRAFT_UNITS};

/// A ground or naval anti-aircraft battery from `WEBasicAntiAircraftUnits.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiAircraftUnit {
    pub unit: String,
    pub nationality: String,
    pub cost: i32,
    pub anti_aircraft_strength: i32,
    pub damage_capacity: i32,
    /// "Land", "Sea", ...
    pub domain: String,
    pub special: String,
    pub model: String,
    pub gun: String,
}

impl AntiAircraftUnit {
    pub fn roll_anti_aircraft(&self, rng: &mut impl Rng) -> u32 {
        roll_hits(self.anti_aircraft_strength, rng)
    }
}

impl Record for AntiAircraftUnit {
    const SCHEMA: &'static TableSchema = &ANTI_AIRCRAFT_UNITS;

    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            unit: row.text(0),
            nationality: row.text(1),
            cost: row.int(2)?,
            anti_aircraft_strength: row.int(3)?,
            damage_capacity: row.int(4)?,
            domain: row.text(5),
            special: row.text(6),
            model: row.text(7),
            gun: row.text(8),
        })
    }

    fn key(&self) -> &str {
        &self.unit
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::text(&self.unit),
            FieldValue::text(&self.nationality),
            self.cost.into(),
            self.anti_aircraft_strength.into(),
            self.damage_capacity.into(),
            FieldValue::text(&self.domain),
            FieldValue::text(&self.special),
            FieldValue::text(&self.model),
            FieldValue::text(&self.gun),
        ]
    }
}
