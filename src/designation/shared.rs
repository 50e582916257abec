use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::pool::DesignationPool;
use crate::model::Designation;

/// A designation pool that can be handed to several spawners at once.
///
/// The lock is held across the whole filter, pick and insert sequence, so
/// two callers racing for the last free name cannot both receive it.
#[derive(Debug, Clone)]
pub struct SharedDesignationPool {
    inner: Arc<Mutex<DesignationPool>>,
}

impl SharedDesignationPool {
    pub fn new(pool: DesignationPool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    pub fn random_designation(&self, nationality: &str, role: &str) -> Option<Designation> {
        self.lock().random_designation(nationality, role)
    }

    pub fn reset_assigned_designations(&self) {
        self.lock().reset_assigned_designations();
    }

    pub fn remaining(&self, nationality: &str, role: &str) -> usize {
        self.lock().remaining(nationality, role)
    }

    pub fn assigned_count(&self) -> usize {
        self.lock().assigned_count()
    }

    fn lock(&self) -> MutexGuard<'_, DesignationPool> {
        // A panic elsewhere cannot leave the assigned set half-updated
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<DesignationPool> for SharedDesignationPool {
    fn from(pool: DesignationPool) -> Self {
        Self::new(pool)
    }
}
