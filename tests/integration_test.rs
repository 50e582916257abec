//! Integration tests that load a data directory and verify the catalog
//! (and its SQLite export) against the source rows.
//!
//! These tests:
//! 1. Write a fixture data directory with all six tables
//! 2. Sample random rows from each source file
//! 3. Compare the loaded record (and exported row) field by field

mod common;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use war_eagles_catalog::catalog::Table;
use war_eagles_catalog::parser::{FieldValue, Record};
use war_eagles_catalog::schema::{ColumnType, TableSchema, ALL_TABLES};
use war_eagles_catalog::writer::export_to_sqlite;
use war_eagles_catalog::{Catalog, CatalogConfig, TableKind};

// =============================================================================
// Test Configuration
// =============================================================================

/// Number of random samples per table
const SAMPLE_SIZE: usize = 3;

/// Random seed for reproducible sampling
const RANDOM_SEED: u64 = 42;

// =============================================================================
// Shared Fixture
// =============================================================================

/// Fixture data directory - written and loaded once for all tests
static FIXTURE: Lazy<Fixture> = Lazy::new(Fixture::new);

struct Fixture {
    _dir: TempDir,
    config: CatalogConfig,
    catalog: Catalog,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        common::write_data_dir(dir.path());

        let config = CatalogConfig::new(dir.path());
        let catalog = Catalog::load(&config);

        Self {
            _dir: dir,
            config,
            catalog,
        }
    }
}

/// A data directory holding only the given tables
fn data_dir_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (file_name, content) in files {
        fs::write(dir.path().join(file_name), content).expect("Failed to write table");
    }
    dir
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Non-blank data lines of a source file, sampled with a fixed seed
fn sample_lines(path: &Path, count: usize) -> Vec<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    let lines: Vec<String> = content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect();

    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    lines
        .choose_multiple(&mut rng, count.min(lines.len()))
        .cloned()
        .collect()
}

/// Field values a source line should load as. Fixture rows never quote.
fn expected_values(line: &str, schema: &TableSchema) -> Vec<FieldValue> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    assert_eq!(
        fields.len(),
        schema.expected_columns(),
        "Fixture row has wrong width: {}",
        line
    );

    fields
        .into_iter()
        .zip(schema.columns)
        .map(|(raw, column)| match column.col_type {
            ColumnType::Integer => FieldValue::Integer(
                raw.parse()
                    .unwrap_or_else(|_| panic!("{}: bad integer '{}'", column.name, raw)),
            ),
            ColumnType::Text => FieldValue::text(raw),
        })
        .collect()
}

fn verify_keyed_table<T: Record>(table: &Table<T>) {
    let schema = T::SCHEMA;
    let path = FIXTURE.config.source_path(schema);

    let samples = sample_lines(&path, SAMPLE_SIZE);
    assert!(!samples.is_empty(), "No rows sampled for {}", schema.name);

    for line in samples {
        let expected = expected_values(&line, schema);
        let FieldValue::Text(key) = &expected[0] else {
            panic!("{}: key column is not text", schema.name);
        };

        let record = table
            .get(key)
            .unwrap_or_else(|| panic!("Record '{}' not found in {}", key, schema.name));

        assert_eq!(
            record.values(),
            expected,
            "Mismatch in {} for key '{}'",
            schema.name,
            key
        );
    }
}

// =============================================================================
// Round-trip Tests
// =============================================================================

macro_rules! keyed_table_test {
    ($test_name:ident, $accessor:ident) => {
        #[test]
        fn $test_name() {
            verify_keyed_table(FIXTURE.catalog.$accessor());
        }
    };
}

keyed_table_test!(test_air_units, air_units);
keyed_table_test!(test_anti_aircraft_units, anti_aircraft_units);
keyed_table_test!(test_zones, zones);
keyed_table_test!(test_aces, aces);
keyed_table_test!(test_events, events);

#[test]
fn test_designations() {
    let path = FIXTURE.config.source_path(&war_eagles_catalog::schema::DESIGNATIONS);
    let loaded: Vec<Vec<FieldValue>> = FIXTURE
        .catalog
        .designations()
        .iter()
        .map(|d| d.values())
        .collect();

    for line in sample_lines(&path, SAMPLE_SIZE) {
        let expected = expected_values(&line, &war_eagles_catalog::schema::DESIGNATIONS);
        assert!(
            loaded.contains(&expected),
            "Designation not loaded: {}",
            line
        );
    }
}

// =============================================================================
// Load Report Tests
// =============================================================================

#[test]
fn test_fixture_loads_clean() {
    let report = FIXTURE.catalog.report();
    let problems: Vec<String> = report.diagnostics().map(|d| d.to_string()).collect();
    assert!(report.is_clean(), "Unexpected diagnostics: {:?}", problems);

    assert_eq!(FIXTURE.catalog.air_units().len(), 8);
    assert_eq!(FIXTURE.catalog.anti_aircraft_units().len(), 3);
    assert_eq!(FIXTURE.catalog.zones().len(), 4);
    assert_eq!(FIXTURE.catalog.aces().len(), 3);
    assert_eq!(FIXTURE.catalog.events().len(), 3);
    assert_eq!(FIXTURE.catalog.designations().len(), 8);
    assert_eq!(report.total_loaded(), 29);
}

#[test]
fn test_one_bad_row_keeps_the_rest() {
    let broken_aces = "\
Pilot,Nationality,Cost,Bonus,Model,FlavorText
Saburo Sakai,Japan,3,2,sakai.png,Samurai
Erich Hartmann,Germany,four,3,hartmann.png,The Black Devil
Richard Bong,USA,4,2,bong.png,Top-scoring American ace
";
    let dir = data_dir_with(&[("WEBasicAces.csv", broken_aces)]);
    let catalog = Catalog::load(&CatalogConfig::new(dir.path()));

    assert_eq!(catalog.aces().len(), 2);
    assert!(catalog.ace_by_pilot("Saburo Sakai").is_some());
    assert!(catalog.ace_by_pilot("Richard Bong").is_some());
    assert!(catalog.ace_by_pilot("Erich Hartmann").is_none());

    let report = catalog.report().table("aces").expect("aces report");
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].line, Some(3));
}

#[test]
fn test_missing_source_leaves_table_empty() {
    let dir = data_dir_with(&[("WEBasicZones.csv", common::ZONES_CSV)]);
    let catalog = Catalog::load(&CatalogConfig::new(dir.path()));

    assert_eq!(catalog.zones().len(), 4);
    assert!(catalog.air_units().is_empty());
    assert!(catalog.designations().is_empty());

    let report = catalog.report();
    assert!(!report.is_clean());
    assert!(report.table("air_units").map(|t| t.failed).unwrap_or(false));
    assert!(!report.table("zones").map(|t| t.failed).unwrap_or(true));
    assert!(catalog.air_unit_by_name("Ta-152").is_none());
}

#[test]
fn test_duplicate_key_first_wins() {
    let events = "\
Title,Nationality,Cost,Effect,Area of Effect,Duration,Maximum Quantity,Model,Sound
Kamikaze,Japan,4,First definition,1 Zone,1 Turn,3,kamikaze.png,dive
KAMIKAZE,Japan,9,Second definition,1 Zone,1 Turn,1,kamikaze.png,dive
";
    let dir = data_dir_with(&[("WEBasicEvents.csv", events)]);
    let catalog = Catalog::load(&CatalogConfig::new(dir.path()));

    let event = catalog.event_by_title("kamikaze").expect("event");
    assert_eq!(event.cost, 4);
    assert_eq!(event.effect, "First definition");

    let report = catalog.report().table("events").expect("events report");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].line, Some(3));
}

#[test]
fn test_unclosed_quote_keeps_following_rows() {
    let aces = "\
Pilot,Nationality,Cost,Bonus,Model,FlavorText
Saburo Sakai,Japan,3,2,sakai.png,\"Samurai of Tainan
Erich Hartmann,Germany,4,3,hartmann.png,The Black Devil
Richard Bong,USA,4,2,bong.png,Top-scoring American ace
Adolf Galland,Germany,4,2,galland.png,General der Jagdflieger
";
    let dir = data_dir_with(&[("WEBasicAces.csv", aces)]);
    let catalog = Catalog::load(&CatalogConfig::new(dir.path()));

    assert_eq!(catalog.aces().len(), 3);
    assert!(catalog.ace_by_pilot("Saburo Sakai").is_none());
    assert!(catalog.ace_by_pilot("Adolf Galland").is_some());

    let report = catalog.report().table("aces").expect("aces report");
    assert_eq!(report.skipped, 1);
    assert_eq!(report.diagnostics[0].line, Some(2));
}

/// Header plus "A6M5 Zero", "Ki-43 Hayabusa", and a row two columns short
#[test]
fn test_air_units_with_short_row() {
    let air_units = "\
Unit,Nationality,Role,Weight,Cost,Air Attack Strength,Bombing Strength,Damage Capacity,Fuel,Year,Special 1,Special 2,Model LOD0,Model LOD1,Motor,Gun
A6M5 Zero,Japan,Fighter,Light,4,3,0,1,5,1943,Dogfighter,,A6M5LOD0.glb,A6M5LOD1.glb,radial,twenty
Ki-43 Hayabusa,Japan,Fighter,Light,3,2,0,1,4,1941,Dogfighter,,Ki43LOD0.glb,Ki43LOD1.glb,radial,mg
Ki-61 Hien,Japan,Fighter,Medium,5,3,0,2,4,1943,,,Ki61LOD0.glb,Ki61LOD1.glb
";
    let dir = data_dir_with(&[("WEBasicAirUnits.csv", air_units)]);
    let catalog = Catalog::load(&CatalogConfig::new(dir.path()));

    assert_eq!(catalog.air_units().len(), 2);
    assert_eq!(
        catalog
            .air_unit_by_name("Ki-43 Hayabusa")
            .map(|u| u.nationality.as_str()),
        Some("Japan")
    );
    assert!(catalog.air_unit_by_name("Ki-61 Hien").is_none());

    let diagnostics: Vec<_> = catalog
        .report()
        .diagnostics()
        .filter(|d| d.table == "air_units")
        .collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, Some(4));
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_ignores_case() {
    let catalog = &FIXTURE.catalog;

    let lower = catalog.air_unit_by_name("ta-152").expect("lower-case lookup");
    let exact = catalog.air_unit_by_name("Ta-152").expect("exact lookup");
    assert_eq!(lower, exact);
    assert_eq!(lower.nationality, "Germany");

    assert!(catalog.get(TableKind::Zone, "BERLIN").is_some());
    assert!(catalog.get(TableKind::Ace, "erich hartmann").is_some());
    assert!(catalog.get(TableKind::Event, "Blitz").is_none());
}

#[test]
fn test_zone_stat_rows() {
    let rows = FIXTURE.catalog.stat_rows(TableKind::Zone, "berlin");
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0], ("Target Name", "Berlin".to_string()));
    assert!(rows.contains(&("Facility", "Oberdorf".to_string())));

    let zone = FIXTURE.catalog.zone_by_target_name("Berlin").expect("zone");
    assert_eq!(zone.combined_aa_strength(), 6);
}

// =============================================================================
// Export Tests
// =============================================================================

fn export_fixture(tables: &[&TableSchema]) -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("war_eagles.sqlite");

    export_to_sqlite(&FIXTURE.catalog, &db_path, tables, false)
        .expect("Failed to export catalog");

    let conn = Connection::open(&db_path).expect("Failed to open exported database");
    (dir, conn)
}

#[test]
fn test_export_row_counts() {
    let (_dir, conn) = export_fixture(ALL_TABLES);

    for schema in ALL_TABLES {
        let sql = format!("SELECT COUNT(*) FROM {}", schema.name);
        let exported: i64 = conn
            .query_row(&sql, [], |row| row.get(0))
            .unwrap_or_else(|e| panic!("Failed to count {}: {}", schema.name, e));
        let loaded = FIXTURE.catalog.count(schema.name).expect("known table");
        assert_eq!(exported as usize, loaded, "Row count mismatch in {}", schema.name);
    }
}

#[test]
fn test_export_matches_catalog() {
    let (_dir, conn) = export_fixture(ALL_TABLES);

    let (nationality, cost): (String, i64) = conn
        .query_row(
            "SELECT nationality, cost FROM air_units WHERE unit = ?1 COLLATE NOCASE",
            ["ta-152"],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("Ta-152 exported");
    assert_eq!(nationality, "Germany");
    assert_eq!(cost, 7);

    let fighters: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM designations WHERE nationality = 'Germany' AND type = 'Fighter'",
            [],
            |row| row.get(0),
        )
        .expect("designation count");
    assert_eq!(fighters as usize, common::GERMAN_FIGHTER_DESIGNATIONS);
}

#[test]
fn test_export_selected_tables_only() {
    let (_dir, conn) = export_fixture(&[&war_eagles_catalog::schema::ACES]);

    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .expect("Failed to prepare query");
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("Failed to list tables")
        .collect::<rusqlite::Result<_>>()
        .expect("table list");
    assert_eq!(tables, vec!["aces".to_string()]);
}

#[test]
fn test_export_keeps_duplicate_keys() {
    let events = "\
Title,Nationality,Cost,Effect,Area of Effect,Duration,Maximum Quantity,Model,Sound
Kamikaze,Japan,4,First definition,1 Zone,1 Turn,3,kamikaze.png,dive
KAMIKAZE,Japan,9,Second definition,1 Zone,1 Turn,1,kamikaze.png,dive
";
    let data = data_dir_with(&[("WEBasicEvents.csv", events)]);
    let catalog = Catalog::load(&CatalogConfig::new(data.path()));

    let out = TempDir::new().expect("Failed to create temp dir");
    let db_path = out.path().join("events.sqlite");
    let tables = [&war_eagles_catalog::schema::EVENTS];
    let written =
        export_to_sqlite(&catalog, &db_path, &tables, false).expect("Failed to export catalog");
    assert_eq!(written, 2);

    let conn = Connection::open(&db_path).expect("Failed to open exported database");
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM events WHERE title = 'kamikaze' COLLATE NOCASE",
            [],
            |row| row.get(0),
        )
        .expect("event count");
    assert_eq!(count, 2);
}
