use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::schema::TableSchema;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "WAR_EAGLES_DATA_DIR";

/// Data directory used when nothing else is configured, relative to the
/// working directory
pub const DEFAULT_DATA_DIR: &str = "Data/Raw Data";

/// Where the catalog reads its source tables from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    data_dir: PathBuf,
}

impl CatalogConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Pick the data directory: an explicit path (CLI flag or environment)
    /// wins, then the platform data directory if it exists, then
    /// [`DEFAULT_DATA_DIR`].
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }

        match platform_data_dir() {
            Some(dir) if dir.is_dir() => Self::new(dir),
            _ => Self::new(DEFAULT_DATA_DIR),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a table's source file
    pub fn source_path(&self, schema: &TableSchema) -> PathBuf {
        self.data_dir.join(schema.source_file)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

fn platform_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "war-eagles").map(|dirs| dirs.data_dir().to_path_buf())
}
