use serde::{Deserialize, Serialize};

use crate::error::RowError;
use crate::parser::{FieldValue, Record, RowFields};
use crate::schema::{TableSchema, EVENTS};

/// A purchasable event card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub nationality: String,
    pub cost: i32,
    pub effect: String,
    /// e.g. "1 Zone"
    pub area_of_effect: String,
    /// e.g. "Immediate"
    pub duration: String,
    pub maximum_quantity: i32,
    pub model: String,
    /// Sound cue name
    pub sound: String,
}

impl Record for Event {
    const SCHEMA: &'static TableSchema = &EVENTS;

    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            title: row.text(0),
            nationality: row.text(1),
            cost: row.int(2)?,
            effect: row.text(3),
            area_of_effect: row.text(4),
            duration: row.text(5),
            maximum_quantity: row.int(6)?,
            model: row.text(7),
            sound: row.text(8),
        })
    }

    fn key(&self) -> &str {
        &self.title
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::text(&self.title),
            FieldValue::text(&self.nationality),
            self.cost.into(),
            FieldValue::text(&self.effect),
            FieldValue::text(&self.area_of_effect),
            FieldValue::text(&self.duration),
            self.maximum_quantity.into(),
            FieldValue::text(&self.model),
            FieldValue::text(&self.sound),
        ]
    }
}
