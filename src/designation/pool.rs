use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use super::role::RoleCategory;
use crate::catalog::{fold_key, load_list, Catalog, TableReport};
use crate::model::Designation;

/// Squadron names for one play session.
///
/// The pool is read-only once loaded. The assigned set records every name
/// handed out since the last reset, and no name in it is handed out again.
#[derive(Debug, Clone)]
pub struct DesignationPool {
    pool: Vec<Designation>,
    assigned: HashSet<String>,
    rng: StdRng,
}

impl DesignationPool {
    /// An empty (unloaded) pool
    pub fn new() -> Self {
        Self::from_designations(Vec::new())
    }

    pub fn from_designations(designations: Vec<Designation>) -> Self {
        Self {
            pool: designations,
            assigned: HashSet::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Share the designation table of an already loaded catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_designations(catalog.designations().to_vec())
    }

    /// Use a fixed seed so draws are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the pool with the contents of a designation file and start a
    /// fresh session. Bad rows are skipped; a missing file leaves the pool
    /// empty.
    pub fn load_designations(&mut self, path: &Path) -> TableReport {
        let (designations, report) = load_list::<Designation>(path);
        self.pool = designations;
        self.assigned.clear();
        report
    }

    /// Draw a squadron name for a new unit of `nationality` with the given
    /// air unit role.
    ///
    /// Returns `None` when the role has no designation category or when
    /// every matching name has already been assigned this session.
    pub fn random_designation(&mut self, nationality: &str, role: &str) -> Option<Designation> {
        let Some(category) = RoleCategory::from_unit_role(role) else {
            warn!(nationality, role, "unsupported role for designation");
            return None;
        };

        let nationality_key = fold_key(nationality.trim());
        let assigned = &self.assigned;
        let chosen = self
            .pool
            .iter()
            .filter(|d| is_candidate(d, &nationality_key, category, assigned))
            .choose(&mut self.rng)
            .cloned();

        match chosen {
            Some(designation) => {
                self.assigned.insert(designation.squadron_name.clone());
                info!(
                    squadron = %designation.squadron_name,
                    nationality,
                    role,
                    "assigned designation"
                );
                Some(designation)
            }
            None => {
                debug!(nationality, role, "no designation available");
                None
            }
        }
    }

    /// Forget every assignment. Called once at the start of a new game.
    pub fn reset_assigned_designations(&mut self) {
        self.assigned.clear();
    }

    /// How many names are still available for a nationality and role
    pub fn remaining(&self, nationality: &str, role: &str) -> usize {
        let Some(category) = RoleCategory::from_unit_role(role) else {
            return 0;
        };
        let nationality_key = fold_key(nationality.trim());
        self.pool
            .iter()
            .filter(|d| is_candidate(d, &nationality_key, category, &self.assigned))
            .count()
    }

    pub fn is_assigned(&self, squadron_name: &str) -> bool {
        self.assigned.contains(squadron_name)
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn designations(&self) -> &[Designation] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl Default for DesignationPool {
    fn default() -> Self {
        Self::new()
    }
}

fn is_candidate(
    designation: &Designation,
    nationality_key: &str,
    category: RoleCategory,
    assigned: &HashSet<String>,
) -> bool {
    fold_key(designation.nationality.trim()) == nationality_key
        && category.matches(&designation.kind)
        && !assigned.contains(&designation.squadron_name)
}
