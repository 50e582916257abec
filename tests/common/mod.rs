//! Fixture data tables shared by the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const AIR_UNITS_CSV: &str = "\
Unit,Nationality,Role,Weight,Cost,Air Attack Strength,Bombing Strength,Damage Capacity,Fuel,Year,Special 1,Special 2,Model LOD0,Model LOD1,Motor,Gun
A6M5 Zero,Japan,Fighter,Light,4,3,0,1,5,1943,Dogfighter,,A6M5LOD0.glb,A6M5LOD1.glb,radial,twenty
Ki-43 Hayabusa,Japan,Fighter,Light,3,2,0,1,4,1941,Dogfighter,,Ki43LOD0.glb,Ki43LOD1.glb,radial,mg
Ta-152, Germany ,Fighter,Medium,7,5,0,2,4,1945,High Altitude,,Ta152LOD0.glb,Ta152LOD1.glb,inline,thirty
Bf 110,Germany,Fighter/Bomber,Medium,5,3,2,2,4,1940,,,Bf110LOD0.glb,Bf110LOD1.glb,inline,twenty
Ju 87 Stuka,Germany,Bomber,Light,4,1,3,1,3,1939,Dive Bomber: Each hit vs Antiaircraft Units counts as 2 hits.,,Ju87LOD0.glb,Ju87LOD1.glb,inline,mg

P-51D Mustang,USA,Fighter,Medium,6,4,1,2,6,1944,Escort,,P51LOD0.glb,P51LOD1.glb,inline,fifty
B-17G Flying Fortress,USA,Bomber,Heavy,9,2,5,4,6,1943,Defensive Fire,Heavy Bomber,B17LOD0.glb,B17LOD1.glb,radial,fifty
Ar 234 Blitz,Germany,Bomber/Recon,Medium,6,0,3,2,5,1944,Jet,,Ar234LOD0.glb,Ar234LOD1.glb,jet,none
";

pub const ANTI_AIRCRAFT_UNITS_CSV: &str = "\
Unit,Nationality,Cost,AntiAircraft Strength,Damage Capacity,Domain,Special,Model,Gun
Type 96 25mm,Japan,2,2,1,Land,,Type9625mmLOD0.glb,Auto
8.8 cm Flak 36,Germany,3,3,2,Land,Radar: When present in a zone its owner is always the initiative player,Flak36LOD0.glb,Heavy
USS Atlanta,USA,5,4,3,Sea,,AtlantaLOD0.glb,Auto
";

pub const ZONES_CSV: &str = "\
Target Name,Nationality,Domain,AA Strength,Damage Capacity,Production,VP Value,Facility,Category,Facility AA,Facility Damage Cap,Model
Berlin,Germany,Land,4,6,10,3,Oberdorf,Airbase,2,3,Berlin.glb
Tokyo,Japan,Land,3,6,8,3,Atsugi,Airfield,1,2,Tokyo.glb
London,UK,Land,3,5,9,3,Biggin Hill,Airbase,2,3,London.glb
Truk,Japan,Sea,2,3,2,1,Eten,Airstrip,1,1,Truk.glb
";

pub const ACES_CSV: &str = "\
Pilot,Nationality,Cost,Bonus,Model,FlavorText
Saburo Sakai,Japan,3,2,sakai.png,Tainan Kokutai ace with true samurai spirit
Erich Hartmann,Germany,4,3,hartmann.png,The Black Devil of the Ukraine
Richard Bong,USA,4,2,bong.png,Top-scoring American ace of the war
";

pub const EVENTS_CSV: &str = "\
Title,Nationality,Cost,Effect,Area of Effect,Duration,Maximum Quantity,Model,Sound
Ballistic Missiles,Germany,6,If the Peenemunde target is in play roll 4 dice against one zone,1 Zone,Immediate,2,missile.png,missile
Kamikaze,Japan,4,Each bomber may sacrifice itself for two extra hits,1 Zone,1 Turn,3,kamikaze.png,dive
Radar Network,UK,3,Interceptors always act first,All Zones,Permanent,1,radar.png,radar
";

pub const DESIGNATIONS_CSV: &str = "\
SquadronName,Nationality,Type,Special
I/JG 2,Germany,Fighter,
II/JG 26,Germany,Fighter,
III/JG 52,Germany,Fighter,
II/KG 3,Germany,Bomber,
I/StG 2,Germany,Bomber,Dive Bomber
27th FS,USA,Fighter,
91st BG,USA,Bomber,
64th Sentai,Japan,Fighter,
";

/// Germany/Fighter entries in [`DESIGNATIONS_CSV`]
pub const GERMAN_FIGHTER_DESIGNATIONS: usize = 3;

pub const FILES: [(&str, &str); 6] = [
    ("WEBasicAirUnits.csv", AIR_UNITS_CSV),
    ("WEBasicAntiAircraftUnits.csv", ANTI_AIRCRAFT_UNITS_CSV),
    ("WEBasicZones.csv", ZONES_CSV),
    ("WEBasicAces.csv", ACES_CSV),
    ("WEBasicEvents.csv", EVENTS_CSV),
    ("Designations.csv", DESIGNATIONS_CSV),
];

/// Write every fixture table into `dir`
pub fn write_data_dir(dir: &Path) {
    for (file_name, content) in FILES {
        fs::write(dir.join(file_name), content).expect("Failed to write fixture table");
    }
}
