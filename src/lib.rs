//! Game data catalog for the War Eagles air war game.
//!
//! Loads the CSV data tables (air units, anti-aircraft units, zones, aces,
//! events, squadron designations) into typed, read-only tables with
//! case-insensitive lookup, and assigns unique squadron designations to new
//! units for the length of a play session.

pub mod catalog;
pub mod cli;
pub mod combat;
pub mod config;
pub mod designation;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod parser;
pub mod schema;
pub mod writer;

pub use catalog::{Catalog, Entry, LoadReport, TableKind};
pub use cli::{Cli, Commands};
pub use config::CatalogConfig;
pub use designation::{DesignationPool, RoleCategory, SharedDesignationPool};
