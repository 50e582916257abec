use std::path::PathBuf;

use thiserror::Error;

/// A single data row that could not be turned into a record.
///
/// Row errors never abort a load; they are collected as diagnostics and the
/// remaining rows are still read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidInteger {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: unclosed quote")]
    UnclosedQuote { line: u64 },
    #[error("line {line}: unreadable row ({detail})")]
    Undecodable { line: u64, detail: String },
}

impl RowError {
    /// 1-based line number of the offending row in the source file
    pub fn line(&self) -> u64 {
        match self {
            RowError::ColumnCount { line, .. }
            | RowError::InvalidInteger { line, .. }
            | RowError::UnclosedQuote { line }
            | RowError::Undecodable { line, .. } => *line,
        }
    }
}

/// A table source that could not be opened at all. The table stays empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source file not found: {path:?}")]
    Missing { path: PathBuf },
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
