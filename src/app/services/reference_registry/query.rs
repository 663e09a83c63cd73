//! Secondary lookup and inspection helpers
//!
//! The composite-key lookup in the module root covers the reconciliation
//! path; the helpers here serve snapshot inspection and reporting.

use super::{OrgKey, ReferenceRegistry};
use crate::app::models::ReferenceRow;

impl ReferenceRegistry {
    /// Find every row nested beneath a parent branch
    pub fn find_by_parent_branch_code(&self, parent_branch_code: &str) -> Vec<&ReferenceRow> {
        self.rows
            .iter()
            .filter(|row| row.parent_branch_code == parent_branch_code)
            .collect()
    }

    /// Find rows whose kana name contains the given fragment
    ///
    /// Kana names are matched verbatim; callers normalize width/case on
    /// their side if they need looser matching.
    pub fn find_by_name_kana(&self, fragment: &str) -> Vec<&ReferenceRow> {
        self.rows
            .iter()
            .filter(|row| row.organization_name_kana.contains(fragment))
            .collect()
    }

    /// Composite keys that were shadowed while loading
    pub fn duplicate_keys(&self) -> &[OrgKey] {
        &self.duplicate_keys
    }

    /// Inspection metadata for reporting
    pub fn metadata(&self) -> RegistryMetadata {
        RegistryMetadata {
            row_count: self.rows.len(),
            indexed_count: self.index.len(),
            duplicate_key_count: self.duplicate_keys.len(),
        }
    }
}

/// Summary of a loaded registry for reporting surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMetadata {
    pub row_count: usize,
    pub indexed_count: usize,
    pub duplicate_key_count: usize,
}
