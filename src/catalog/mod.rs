//! In-memory catalog of every data table, loaded once per session
//!
//! Loading is resilient: each table loads independently, bad rows are
//! skipped with a diagnostic, and a missing source leaves its table empty.
//! Lookups never fail; absence is an ordinary `None`.

mod loader;
mod report;
mod table;

pub use report::{Diagnostic, LoadReport, TableReport};
pub use table::Table;

pub(crate) use loader::load_list;
pub(crate) use table::fold_key;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::model::{Ace, AirUnit, AntiAircraftUnit, Designation, Event, Zone};
use crate::parser::{FieldValue, Record};
use crate::schema::{self, TableSchema};
use loader::load_table;

/// The keyed tables that support lookup by natural key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    AirUnit,
    AntiAircraftUnit,
    Zone,
    Ace,
    Event,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::AirUnit,
        TableKind::AntiAircraftUnit,
        TableKind::Zone,
        TableKind::Ace,
        TableKind::Event,
    ];

    pub fn schema(self) -> &'static TableSchema {
        match self {
            TableKind::AirUnit => &schema::AIR_UNITS,
            TableKind::AntiAircraftUnit => &schema::ANTI_AIRCRAFT_UNITS,
            TableKind::Zone => &schema::ZONES,
            TableKind::Ace => &schema::ACES,
            TableKind::Event => &schema::EVENTS,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema().name)
    }
}

impl FromStr for TableKind {
    type Err = String;

    /// Accepts table names (`air_units`) with `-` or `_` separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.schema().name.eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                format!(
                    "Unknown table: {} (expected one of: {})",
                    s,
                    TableKind::ALL.map(|k| k.schema().name).join(", ")
                )
            })
    }
}

/// A record found by [`Catalog::get`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry<'a> {
    AirUnit(&'a AirUnit),
    AntiAircraftUnit(&'a AntiAircraftUnit),
    Zone(&'a Zone),
    Ace(&'a Ace),
    Event(&'a Event),
}

impl Entry<'_> {
    pub fn kind(&self) -> TableKind {
        match self {
            Entry::AirUnit(_) => TableKind::AirUnit,
            Entry::AntiAircraftUnit(_) => TableKind::AntiAircraftUnit,
            Entry::Zone(_) => TableKind::Zone,
            Entry::Ace(_) => TableKind::Ace,
            Entry::Event(_) => TableKind::Event,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Entry::AirUnit(r) => r.key(),
            Entry::AntiAircraftUnit(r) => r.key(),
            Entry::Zone(r) => r.key(),
            Entry::Ace(r) => r.key(),
            Entry::Event(r) => r.key(),
        }
    }

    pub fn stat_rows(&self) -> Vec<(&'static str, String)> {
        match self {
            Entry::AirUnit(r) => r.stat_rows(),
            Entry::AntiAircraftUnit(r) => r.stat_rows(),
            Entry::Zone(r) => r.stat_rows(),
            Entry::Ace(r) => r.stat_rows(),
            Entry::Event(r) => r.stat_rows(),
        }
    }
}

/// All loaded data tables plus the report of how loading went
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    air_units: Table<AirUnit>,
    anti_aircraft_units: Table<AntiAircraftUnit>,
    zones: Table<Zone>,
    aces: Table<Ace>,
    events: Table<Event>,
    designations: Vec<Designation>,
    report: LoadReport,
}

impl Catalog {
    /// Read all six source files from the configured data directory.
    ///
    /// Never fails. Check [`Catalog::report`] for skipped rows and missing
    /// sources.
    pub fn load(config: &CatalogConfig) -> Self {
        let (air_units, air_report) = load_table::<AirUnit>(&config.source_path(AirUnit::SCHEMA));
        let (anti_aircraft_units, aa_report) =
            load_table::<AntiAircraftUnit>(&config.source_path(AntiAircraftUnit::SCHEMA));
        let (zones, zone_report) = load_table::<Zone>(&config.source_path(Zone::SCHEMA));
        let (aces, ace_report) = load_table::<Ace>(&config.source_path(Ace::SCHEMA));
        let (events, event_report) = load_table::<Event>(&config.source_path(Event::SCHEMA));
        let (designations, designation_report) =
            load_list::<Designation>(&config.source_path(Designation::SCHEMA));

        Self {
            air_units,
            anti_aircraft_units,
            zones,
            aces,
            events,
            designations,
            report: LoadReport {
                tables: vec![
                    air_report,
                    aa_report,
                    zone_report,
                    ace_report,
                    event_report,
                    designation_report,
                ],
            },
        }
    }

    /// Build a catalog from in-memory records. The load report is empty.
    pub fn from_records(
        air_units: Vec<AirUnit>,
        anti_aircraft_units: Vec<AntiAircraftUnit>,
        zones: Vec<Zone>,
        aces: Vec<Ace>,
        events: Vec<Event>,
        designations: Vec<Designation>,
    ) -> Self {
        Self {
            air_units: Table::from_records(air_units),
            anti_aircraft_units: Table::from_records(anti_aircraft_units),
            zones: Table::from_records(zones),
            aces: Table::from_records(aces),
            events: Table::from_records(events),
            designations,
            report: LoadReport::default(),
        }
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn air_units(&self) -> &Table<AirUnit> {
        &self.air_units
    }

    pub fn anti_aircraft_units(&self) -> &Table<AntiAircraftUnit> {
        &self.anti_aircraft_units
    }

    pub fn zones(&self) -> &Table<Zone> {
        &self.zones
    }

    pub fn aces(&self) -> &Table<Ace> {
        &self.aces
    }

    pub fn events(&self) -> &Table<Event> {
        &self.events
    }

    pub fn designations(&self) -> &[Designation] {
        &self.designations
    }

    /// Case-insensitive lookup by natural key in any keyed table
    pub fn get(&self, kind: TableKind, key: &str) -> Option<Entry<'_>> {
        match kind {
            TableKind::AirUnit => self.air_unit_by_name(key).map(Entry::AirUnit),
            TableKind::AntiAircraftUnit => self
                .anti_aircraft_unit_by_name(key)
                .map(Entry::AntiAircraftUnit),
            TableKind::Zone => self.zone_by_target_name(key).map(Entry::Zone),
            TableKind::Ace => self.ace_by_pilot(key).map(Entry::Ace),
            TableKind::Event => self.event_by_title(key).map(Entry::Event),
        }
    }

    pub fn air_unit_by_name(&self, unit: &str) -> Option<&AirUnit> {
        lookup(&self.air_units, unit)
    }

    pub fn anti_aircraft_unit_by_name(&self, unit: &str) -> Option<&AntiAircraftUnit> {
        lookup(&self.anti_aircraft_units, unit)
    }

    pub fn zone_by_target_name(&self, target_name: &str) -> Option<&Zone> {
        lookup(&self.zones, target_name)
    }

    pub fn ace_by_pilot(&self, pilot: &str) -> Option<&Ace> {
        lookup(&self.aces, pilot)
    }

    pub fn event_by_title(&self, title: &str) -> Option<&Event> {
        lookup(&self.events, title)
    }

    /// Stat panel rows for a record; empty when the key is absent
    pub fn stat_rows(&self, kind: TableKind, key: &str) -> Vec<(&'static str, String)> {
        self.get(kind, key)
            .map(|entry| entry.stat_rows())
            .unwrap_or_default()
    }

    /// Number of records held for a table name
    pub fn count(&self, table: &str) -> Option<usize> {
        self.values_for(table).map(|rows| rows.len())
    }

    /// Field values of every record in a table, in file order
    pub fn values_for(&self, table: &str) -> Option<Vec<Vec<FieldValue>>> {
        let rows = match table {
            t if t == schema::AIR_UNITS.name => values_of(&self.air_units),
            t if t == schema::ANTI_AIRCRAFT_UNITS.name => values_of(&self.anti_aircraft_units),
            t if t == schema::ZONES.name => values_of(&self.zones),
            t if t == schema::ACES.name => values_of(&self.aces),
            t if t == schema::EVENTS.name => values_of(&self.events),
            t if t == schema::DESIGNATIONS.name => values_of(&self.designations),
            _ => return None,
        };
        Some(rows)
    }
}

fn lookup<'a, T: Record>(table: &'a Table<T>, key: &str) -> Option<&'a T> {
    let found = table.get(key);
    if found.is_none() {
        debug!(table = T::SCHEMA.name, key, "lookup miss");
    }
    found
}

fn values_of<'a, T: Record + 'a>(records: impl IntoIterator<Item = &'a T>) -> Vec<Vec<FieldValue>> {
    records.into_iter().map(|record| record.values()).collect()
}
