//! Table schema definitions for all War Eagles data tables

use super::types::*;

pub static AIR_UNITS: TableSchema = TableSchema {
    name: "air_units",
    source_file: "WEBasicAirUnits.csv",
    columns: &[
        Column::text("unit", "Unit"),
        Column::text("nationality", "Nationality"),
        Column::text("role", "Role"),
        Column::text("weight", "Weight"),
        Column::integer("cost", "Cost"),
        Column::integer("air_attack_strength", "Air Attack Strength"),
        Column::integer("bombing_strength", "Bombing Strength"),
        Column::integer("damage_capacity", "Damage Capacity"),
        Column::integer("fuel", "Fuel"),
        Column::integer("year", "Year"),
        Column::text("special_1", "Special 1"),
        Column::text("special_2", "Special 2"),
        Column::text("model_lod0", "Model LOD0"),
        Column::text("model_lod1", "Model LOD1"),
        Column::text("motor", "Motor"),
        Column::text("gun", "Gun"),
    ],
    indexes: &[Index::on(&["unit"])],
};

pub static ANTI_AIRCRAFT_UNITS: TableSchema = TableSchema {
    name: "anti_aircraft_units",
    source_file: "WEBasicAntiAircraftUnits.csv",
    columns: &[
        Column::text("unit", "Unit"),
        Column::text("nationality", "Nationality"),
        Column::integer("cost", "Cost"),
        Column::integer("anti_aircraft_strength", "AntiAircraft Strength"),
        Column::integer("damage_capacity", "Damage Capacity"),
        Column::text("domain", "Domain"),
        Column::text("special", "Special"),
        Column::text("model", "Model"),
        Column::text("gun", "Gun"),
    ],
    indexes: &[Index::on(&["unit"])],
};

pub static ZONES: TableSchema = TableSchema {
    name: "zones",
    source_file: "WEBasicZones.csv",
    columns: &[
        Column::text("target_name", "Target Name"),
        Column::text("nationality", "Nationality"),
        Column::text("domain", "Domain"),
        Column::integer("aa_strength", "AA Strength"),
        Column::integer("damage_capacity", "Damage Capacity"),
        Column::integer("production", "Production"),
        Column::integer("vp_value", "VP Value"),
        Column::text("facility_name", "Facility"),
        Column::text("facility_category", "Category"),
        Column::integer("facility_aa_strength", "Facility AA"),
        Column::integer("facility_damage_capacity", "Facility Damage Cap"),
        Column::text("model", "Model"),
    ],
    indexes: &[Index::on(&["target_name"])],
};

pub static ACES: TableSchema = TableSchema {
    name: "aces",
    source_file: "WEBasicAces.csv",
    columns: &[
        Column::text("pilot", "Pilot"),
        Column::text("nationality", "Nationality"),
        Column::integer("cost", "Cost"),
        Column::integer("bonus", "Bonus"),
        Column::text("model", "Model"),
        Column::text("flavor_text", "FlavorText"),
    ],
    indexes: &[Index::on(&["pilot"])],
};

pub static EVENTS: TableSchema = TableSchema {
    name: "events",
    source_file: "WEBasicEvents.csv",
    columns: &[
        Column::text("title", "Title"),
        Column::text("nationality", "Nationality"),
        Column::integer("cost", "Cost"),
        Column::text("effect", "Effect"),
        Column::text("area_of_effect", "Area of Effect"),
        Column::text("duration", "Duration"),
        Column::integer("maximum_quantity", "Maximum Quantity"),
        Column::text("model", "Model"),
        Column::text("sound", "Sound"),
    ],
    indexes: &[Index::on(&["title"])],
};

pub static DESIGNATIONS: TableSchema = TableSchema {
    name: "designations",
    source_file: "Designations.csv",
    columns: &[
        Column::text("squadron_name", "SquadronName"),
        Column::text("nationality", "Nationality"),
        Column::text("type", "Type"),
        Column::text("special", "Special"),
    ],
    indexes: &[Index::on(&["nationality", "type"])],
};

/// All tables in load order
pub static ALL_TABLES: &[&TableSchema] = &[
    &AIR_UNITS,
    &ANTI_AIRCRAFT_UNITS,
    &ZONES,
    &ACES,
    &EVENTS,
    &DESIGNATIONS,
];

/// Get a table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
