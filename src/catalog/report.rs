use std::fmt;
use std::path::PathBuf;

/// One problem found while loading a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub table: &'static str,
    /// Source line, when the problem is tied to a row
    pub line: Option<u64>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.table, line, self.message),
            None => write!(f, "{}: {}", self.table, self.message),
        }
    }
}

/// Outcome of loading a single table
#[derive(Debug, Clone)]
pub struct TableReport {
    pub table: &'static str,
    pub source: PathBuf,
    pub loaded: usize,
    /// Rows rejected by validation
    pub skipped: usize,
    /// The source could not be opened; the table is empty
    pub failed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl TableReport {
    pub(crate) fn new(table: &'static str, source: PathBuf) -> Self {
        Self {
            table,
            source,
            loaded: 0,
            skipped: 0,
            failed: false,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, line: Option<u64>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            table: self.table,
            line,
            message: message.into(),
        });
    }
}

/// Per-table outcomes of a catalog load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub tables: Vec<TableReport>,
}

impl LoadReport {
    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|t| t.table == name)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.tables.iter().flat_map(|t| t.diagnostics.iter())
    }

    /// No failed tables and no diagnostics
    pub fn is_clean(&self) -> bool {
        self.tables
            .iter()
            .all(|t| !t.failed && t.diagnostics.is_empty())
    }

    pub fn total_loaded(&self) -> usize {
        self.tables.iter().map(|t| t.loaded).sum()
    }
}
