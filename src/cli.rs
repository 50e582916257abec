use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::TableKind;
use crate::config::DATA_DIR_ENV;

#[derive(Parser, Debug)]
#[command(name = "war-eagles-catalog")]
#[command(version, about = "Inspect War Eagles data tables and draw squadron designations")]
pub struct Cli {
    /// Directory containing the CSV data tables
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every table and report counts and skipped rows
    Check {
        /// Fail if any row was skipped or any table is missing
        #[arg(long)]
        strict: bool,
    },

    /// Show one record by its name
    Lookup {
        /// Table to search (air_units, anti_aircraft_units, zones, aces, events)
        table: TableKind,

        /// Unit name, target name, pilot or event title (case-insensitive)
        key: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw squadron designations for a nationality and unit role
    Designate {
        /// e.g. Germany, Japan, USA
        nationality: String,

        /// Air unit role: Fighter, Fighter/Bomber or Bomber
        role: String,

        /// How many designations to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll combat dice for an air unit, AA unit or zone
    Roll {
        /// air_units, anti_aircraft_units or zones
        table: TableKind,

        key: String,

        /// Seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export the loaded tables to a SQLite database
    Export {
        /// Output SQLite database path
        output_db: PathBuf,

        /// Only include these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Option<Vec<String>>,

        /// Exclude these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,
    },

    /// List all table names and their source files
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
