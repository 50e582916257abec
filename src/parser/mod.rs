pub mod reader;
pub mod record;

pub use reader::*;
pub use record::*;
