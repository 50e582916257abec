use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use super::report::TableReport;
use super::table::Table;
use crate::parser::{read_records, Parsed, Record};

/// Read one table source into parsed rows, recording every problem in the
/// returned report. Never fails: a missing source yields no rows.
pub(crate) fn load_rows<T: Record>(path: &Path) -> (Vec<Parsed<T>>, TableReport) {
    let table = T::SCHEMA.name;
    let mut report = TableReport::new(table, path.to_path_buf());

    let outcome = match read_records::<T>(path) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(table, error = %err, "failed to load table");
            report.failed = true;
            report.push(None, err.to_string());
            return (Vec::new(), report);
        }
    };

    for err in &outcome.errors {
        warn!(table, line = err.line(), error = %err, "skipping row");
        report.push(Some(err.line()), err.to_string());
    }
    report.skipped = outcome.errors.len();

    if let Some(err) = &outcome.interrupted {
        warn!(table, error = %err, "read interrupted");
        report.push(None, format!("read interrupted: {}", err));
    }

    (outcome.rows, report)
}

/// Load a keyed table. Duplicate keys are kept but reported.
pub(crate) fn load_table<T: Record>(path: &Path) -> (Table<T>, TableReport) {
    let (rows, mut report) = load_rows::<T>(path);
    let mut table = Table::new();

    for Parsed { line, record } in rows {
        let key = record.key().to_string();
        if !table.push(record) {
            warn!(table = report.table, line, key = %key, "duplicate key");
            report.push(Some(line), format!("duplicate key '{}'", key));
        }
    }

    report.loaded = table.len();
    info!(table = report.table, count = report.loaded, "loaded table");
    (table, report)
}

/// Load an unkeyed table as a plain list. Every row is kept, but a repeated
/// key is reported: designations are handed out by name, so a repeat makes
/// its group one name smaller than its row count.
pub(crate) fn load_list<T: Record>(path: &Path) -> (Vec<T>, TableReport) {
    let (rows, mut report) = load_rows::<T>(path);
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for Parsed { line, record } in rows {
        if !seen.insert(record.key().to_string()) {
            warn!(table = report.table, line, key = record.key(), "duplicate key");
            report.push(Some(line), format!("duplicate key '{}'", record.key()));
        }
        records.push(record);
    }

    report.loaded = records.len();
    info!(table = report.table, count = report.loaded, "loaded table");
    (records, report)
}
