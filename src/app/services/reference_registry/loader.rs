//! Registry construction from snapshot rows

use crate::app::models::ReferenceRow;
use tracing::{debug, warn};

use super::{OrgKey, ReferenceRegistry};

/// Statistics from loading a reference snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows received from the provider
    pub total_rows: usize,
    /// Distinct composite keys placed in the index
    pub indexed: usize,
    /// Rows whose composite key was already indexed
    pub duplicate_keys: usize,
}

impl LoadStats {
    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "reference snapshot: {} rows, {} indexed keys, {} duplicates",
            self.total_rows, self.indexed, self.duplicate_keys
        )
    }
}

impl ReferenceRegistry {
    /// Build a registry from provider-supplied snapshot rows
    ///
    /// Rows are indexed by `(branch_code_jinji, section_gr_code_jinji,
    /// area_code)`. When the same composite key appears more than once the
    /// first row wins; later rows stay in `rows()` but are shadowed in the
    /// index, counted, and logged.
    pub fn from_rows(rows: Vec<ReferenceRow>) -> (Self, LoadStats) {
        let mut registry = Self {
            rows,
            ..Self::default()
        };

        for (pos, row) in registry.rows.iter().enumerate() {
            let key = OrgKey::new(
                row.branch_code_jinji.clone(),
                row.section_gr_code_jinji.clone(),
                row.area_code.clone(),
            );
            if registry.index.contains_key(&key) {
                warn!(
                    "duplicate reference key ({}, {}, {}); keeping first occurrence",
                    key.branch_code, key.section_gr_code, key.area_code
                );
                registry.duplicate_keys.push(key);
            } else {
                registry.index.insert(key, pos);
            }
        }

        let stats = LoadStats {
            total_rows: registry.rows.len(),
            indexed: registry.index.len(),
            duplicate_keys: registry.duplicate_keys.len(),
        };
        debug!("{}", stats.summary());

        (registry, stats)
    }
}
