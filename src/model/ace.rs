use serde::{Deserialize, Serialize};

use crate::error::RowError;
use crate::parser::{FieldValue, Record, RowFields};
use crate::schema::{TableSchema, ACES};

/// A named pilot that can be attached to an air unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ace {
    pub pilot: String,
    pub nationality: String,
    pub cost: i32,
    /// Extra air attack dice
    pub bonus: i32,
    pub model: String,
    pub flavor_text: String,
}

impl Record for Ace {
    const SCHEMA: &'static TableSchema = &ACES;

    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            pilot: row.text(0),
            nationality: row.text(1),
            cost: row.int(2)?,
            bonus: row.int(3)?,
            model: row.text(4),
            flavor_text: row.text(5),
        })
    }

    fn key(&self) -> &str {
        &self.pilot
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::text(&self.pilot),
            FieldValue::text(&self.nationality),
            self.cost.into(),
            self.bonus.into(),
            FieldValue::text(&self.model),
            FieldValue::text(&self.flavor_text),
        ]
    }
}
