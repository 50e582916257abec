//! Typed records, one per data table

mod ace;
mod air_unit;
mod anti_aircraft;
mod designation;
mod event;
mod zone;

pub use ace::Ace;
pub use air_unit::AirUnit;
pub use anti_aircraft::AntiAircraftUnit;
pub use designation::Designation;
pub use event::Event;
pub use zone::{Facility, Zone};
