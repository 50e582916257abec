use crate::schema::{get_table, TableSchema, ALL_TABLES};
use anyhow::{anyhow, bail, Result};
use tracing::info;

/// Resolves which tables to export based on include/exclude filters
pub fn resolve_tables(
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> Result<Vec<&'static TableSchema>> {
    match (include, exclude) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --include and --exclude at the same time");
        }
        (Some(include_list), None) => {
            let mut tables = Vec::new();
            for name in &include_list {
                let table = lookup(name)?;
                if !tables.iter().any(|t: &&TableSchema| t.name == table.name) {
                    tables.push(table);
                }
            }
            info!(count = tables.len(), "including selected tables");
            Ok(tables)
        }
        (None, Some(exclude_list)) => {
            let excluded = exclude_list
                .iter()
                .map(|name| lookup(name).map(|t| t.name))
                .collect::<Result<Vec<_>>>()?;

            let tables: Vec<_> = ALL_TABLES
                .iter()
                .copied()
                .filter(|t| !excluded.contains(&t.name))
                .collect();
            info!(count = tables.len(), "including tables after exclusions");
            Ok(tables)
        }
        (None, None) => Ok(ALL_TABLES.to_vec()),
    }
}

fn lookup(name: &str) -> Result<&'static TableSchema> {
    get_table(name.trim()).ok_or_else(|| anyhow!("Unknown table: {}", name))
}
