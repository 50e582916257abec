use serde::{Deserialize, Serialize};

use crate::error::RowError;
use crate::parser::{FieldValue, Record, RowFields};
use crate::schema::{TableSchema, DESIGNATIONS};

/// A squadron name available to one nationality and role category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    /// e.g. "I/JG 2", "27th FS"
    pub squadron_name: String,
    pub nationality: String,
    /// Role category: "Fighter" or "Bomber"
    #[serde(rename = "type")]
    pub kind: String,
    /// e.g. "Dive Bomber"; often empty
    pub special: String,
}

impl Designation {
    pub fn new(
        squadron_name: impl Into<String>,
        nationality: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            squadron_name: squadron_name.into(),
            nationality: nationality.into(),
            kind: kind.into(),
            special: String::new(),
        }
    }
}

impl Record for Designation {
    const SCHEMA: &'static TableSchema = &DESIGNATIONS;

    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            squadron_name: row.text(0),
            nationality: row.text(1),
            kind: row.text(2),
            special: row.text(3),
        })
    }

    fn key(&self) -> &str {
        &self.squadron_name
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::text(&self.squadron_name),
            FieldValue::text(&self.nationality),
            FieldValue::text(&self.kind),
            FieldValue::text(&self.special),
        ]
    }
}
