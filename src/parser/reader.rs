use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::record::{Record, RowFields};
use crate::error::{LoadError, RowError};

/// A record together with the source line it came from
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub line: u64,
    pub record: T,
}

/// Result of reading one table source
#[derive(Debug)]
pub struct ParseOutcome<T> {
    pub rows: Vec<Parsed<T>>,
    pub errors: Vec<RowError>,
    /// Set when reading stopped early on an I/O failure. Rows read before
    /// the failure are kept.
    pub interrupted: Option<io::Error>,
}

impl<T> ParseOutcome<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            errors: Vec::new(),
            interrupted: None,
        }
    }
}

/// Parse a comma-delimited table: skip the header line, validate the field
/// count of every data row against `T::SCHEMA`, and convert each row with
/// `T::from_row`. Bad rows are collected as errors, never fatal.
///
/// Every physical line is one row. A quoted field may hold commas but never
/// a line break, so a stray quote only costs the row it appears on.
pub fn parse_records<T: Record, R: io::Read>(reader: R) -> ParseOutcome<T> {
    let schema = T::SCHEMA;
    let expected = schema.expected_columns();

    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);

    let mut outcome = ParseOutcome::new();
    let mut record = csv::StringRecord::new();

    for (idx, chunk) in BufReader::new(reader).split(b'\n').enumerate() {
        let line = idx as u64 + 1;
        let mut bytes = match chunk {
            Ok(bytes) => bytes,
            Err(err) => {
                outcome.interrupted = Some(err);
                break;
            }
        };

        // Header
        if line == 1 {
            continue;
        }

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        if let Err(err) = std::str::from_utf8(&bytes) {
            outcome.errors.push(RowError::Undecodable {
                line,
                detail: err.to_string(),
            });
            continue;
        }

        if bytes.iter().filter(|&&b| b == b'"').count() % 2 == 1 {
            outcome.errors.push(RowError::UnclosedQuote { line });
            continue;
        }

        match builder.from_reader(bytes.as_slice()).read_record(&mut record) {
            Ok(true) => {}
            // Empty line
            Ok(false) => continue,
            Err(err) => {
                outcome.errors.push(RowError::Undecodable {
                    line,
                    detail: err.to_string(),
                });
                continue;
            }
        }

        // Blank rows (including ones made only of delimiters)
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        if record.len() != expected {
            outcome.errors.push(RowError::ColumnCount {
                line,
                expected,
                found: record.len(),
            });
            continue;
        }

        match T::from_row(&RowFields::new(line, &record, schema)) {
            Ok(parsed) => outcome.rows.push(Parsed {
                line,
                record: parsed,
            }),
            Err(err) => outcome.errors.push(err),
        }
    }

    outcome
}

/// Open `path` and parse it as a `T` table
pub fn read_records<T: Record>(path: &Path) -> Result<ParseOutcome<T>, LoadError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(parse_records(file))
}
