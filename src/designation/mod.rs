//! Squadron designation assignment
//!
//! Each new unit draws a squadron name scoped to its nationality and role
//! category. Names are never repeated within a session; a reset starts a
//! new session with the same pool.

mod pool;
mod role;
mod shared;

pub use pool::DesignationPool;
pub use role::RoleCategory;
pub use shared::SharedDesignationPool;
