use serde::Serialize;
use std::fmt;

use crate::error::RowError;
use crate::schema::TableSchema;

/// A typed record backed by one table schema.
///
/// Implementors are plain value types; `from_row` is the only way rows turn
/// into records, so every loaded record has passed column-count and integer
/// validation.
pub trait Record: Sized {
    const SCHEMA: &'static TableSchema;

    /// Build a record from a row that already has the expected column count
    fn from_row(row: &RowFields<'_>) -> Result<Self, RowError>;

    /// Natural key (column 0)
    fn key(&self) -> &str;

    /// Field values in schema column order
    fn values(&self) -> Vec<FieldValue>;

    /// Ordered `(header label, value)` pairs for stat panels and tooltips
    fn stat_rows(&self) -> Vec<(&'static str, String)> {
        Self::SCHEMA
            .headers()
            .zip(self.values())
            .map(|(header, value)| (header, value.to_string()))
            .collect()
    }
}

/// A single field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            FieldValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            FieldValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Positional view over one CSV data row
pub struct RowFields<'a> {
    line: u64,
    record: &'a csv::StringRecord,
    schema: &'static TableSchema,
}

impl<'a> RowFields<'a> {
    pub fn new(line: u64, record: &'a csv::StringRecord, schema: &'static TableSchema) -> Self {
        Self {
            line,
            record,
            schema,
        }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    /// Trimmed text of column `idx`; empty when the column is absent
    pub fn text(&self, idx: usize) -> String {
        self.record.get(idx).unwrap_or("").trim().to_string()
    }

    /// Column `idx` parsed as an integer
    pub fn int(&self, idx: usize) -> Result<i32, RowError> {
        let raw = self.record.get(idx).unwrap_or("").trim();
        raw.parse::<i32>().map_err(|_| RowError::InvalidInteger {
            line: self.line,
            column: self
                .schema
                .columns
                .get(idx)
                .map(|c| c.header)
                .unwrap_or("?"),
            value: raw.to_string(),
        })
    }
}
