/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Signed whole number (dice, capacity, cost, year)
    Integer,
    Text,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    /// Storage name (snake_case), used for SQLite columns and JSON keys
    pub name: &'static str,
    /// Label as it appears in the CSV header and in stat panels
    pub header: &'static str,
    pub col_type: ColumnType,
}

impl Column {
    /// Create a text column
    pub const fn text(name: &'static str, header: &'static str) -> Self {
        Self {
            name,
            header,
            col_type: ColumnType::Text,
        }
    }

    /// Create an integer column
    pub const fn integer(name: &'static str, header: &'static str) -> Self {
        Self {
            name,
            header,
            col_type: ColumnType::Integer,
        }
    }
}

/// Lookup index definition. Keys may repeat in the source data, so export
/// indexes are never unique.
#[derive(Debug, Clone)]
pub struct Index {
    pub columns: &'static [&'static str],
}

impl Index {
    pub const fn on(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }
}

/// Table schema definition
///
/// Column order is positional and matches the source file. Column 0 is
/// always the key field.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub source_file: &'static str,
    pub columns: &'static [Column],
    /// Lookup indexes created on export
    pub indexes: &'static [Index],
}

impl TableSchema {
    /// Number of fields every data row must have
    pub fn expected_columns(&self) -> usize {
        self.columns.len()
    }

    /// Header labels in column order
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.header)
    }
}
