use anyhow::{Context, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use super::schema_gen::{generate_create_table, generate_indexes};
use crate::catalog::Catalog;
use crate::parser::FieldValue;
use crate::schema::TableSchema;

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    pub fn new(db_path: &Path) -> Result<Self> {
        // Remove existing database if present
        if db_path.exists() {
            std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("Failed to create database")?;

        // Bulk insert into a throwaway file
        conn.execute_batch("PRAGMA synchronous = OFF;")?;

        Ok(Self { conn })
    }

    /// Create all tables for the given schemas
    pub fn create_tables(&self, schemas: &[&TableSchema]) -> Result<()> {
        info!(count = schemas.len(), "creating tables");

        for schema in schemas {
            let sql = generate_create_table(schema);
            self.conn
                .execute(&sql, [])
                .with_context(|| format!("Failed to create table: {}", schema.name))?;

            for index_sql in generate_indexes(schema) {
                self.conn
                    .execute(&index_sql, [])
                    .with_context(|| format!("Failed to create index for: {}", schema.name))?;
            }
        }

        Ok(())
    }

    /// Insert every row of one table inside a single transaction
    pub fn import_table(
        &mut self,
        schema: &TableSchema,
        rows: &[Vec<FieldValue>],
        progress: &ProgressBar,
    ) -> Result<u64> {
        let columns: Vec<String> = schema
            .columns
            .iter()
            .map(|c| format!("\"{}\"", c.name))
            .collect();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        let insert_sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            schema.name,
            columns.join(", "),
            placeholders.join(", ")
        );

        let tx = self.conn.transaction()?;
        let mut count: u64 = 0;

        {
            let mut stmt = tx.prepare_cached(&insert_sql)?;
            for row in rows {
                for (idx, value) in row.iter().enumerate() {
                    value.bind_to(idx + 1, &mut stmt)?;
                }
                stmt.raw_execute()
                    .with_context(|| format!("Failed to insert into {}", schema.name))?;
                count += 1;
                progress.set_position(count);
            }
        }

        tx.commit()?;
        progress.finish_with_message(format!("{}: {} records", schema.name, count));

        Ok(count)
    }

    pub fn finalize(self) -> Result<()> {
        self.conn.execute_batch("PRAGMA optimize;")?;
        Ok(())
    }
}

/// Write the selected catalog tables to a fresh SQLite database.
///
/// Returns the total number of records written.
pub fn export_to_sqlite(
    catalog: &Catalog,
    output_db: &Path,
    tables: &[&TableSchema],
    show_progress: bool,
) -> Result<u64> {
    let mut writer = SqliteWriter::new(output_db)?;

    writer.create_tables(tables)?;

    let multi = if show_progress {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    };
    let style = ProgressStyle::default_bar()
        .template("{msg:30} [{bar:40.cyan/blue}] {pos}/{len}")?
        .progress_chars("=>-");

    let mut total_records: u64 = 0;

    for schema in tables {
        let rows = catalog.values_for(schema.name).unwrap_or_default();

        let pb = multi.add(ProgressBar::new(rows.len() as u64));
        pb.set_style(style.clone());
        pb.set_message(schema.name.to_string());

        let count = writer.import_table(schema, &rows, &pb)?;
        info!(table = schema.name, count, "exported table");
        total_records += count;
    }

    writer.finalize()?;

    Ok(total_records)
}
