//! Configuration management and validation.
//!
//! Provides the configuration value handed to the engine and CLI at
//! construction: the reference snapshot location and the column-name
//! mappings used by the tabular adapters. There is no process-wide
//! configuration state.

use crate::constants::columns;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// Column-name mapping for the request table
///
/// Each field names the header under which the corresponding attribute
/// arrives from the upstream provider. Defaults are the canonical names in
/// [`crate::constants::columns`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestColumns {
    pub application_type: String,
    pub target_org: String,
    pub branch_code: String,
    pub section_gr_code: String,
    pub area_code: String,
    pub branch_name: String,
    pub remarks: String,
    pub internal_sales_dept_code: String,
    pub internal_sales_dept_name: String,
    pub reference_bpr_target_flag: String,
}

impl Default for RequestColumns {
    fn default() -> Self {
        Self {
            application_type: columns::APPLICATION_TYPE.to_string(),
            target_org: columns::TARGET_ORG.to_string(),
            branch_code: columns::BRANCH_CODE.to_string(),
            section_gr_code: columns::SECTION_GR_CODE.to_string(),
            area_code: columns::AREA_CODE.to_string(),
            branch_name: columns::BRANCH_NAME.to_string(),
            remarks: columns::REMARKS.to_string(),
            internal_sales_dept_code: columns::INTERNAL_SALES_DEPT_CODE.to_string(),
            internal_sales_dept_name: columns::INTERNAL_SALES_DEPT_NAME.to_string(),
            reference_bpr_target_flag: columns::REFERENCE_BPR_TARGET_FLAG.to_string(),
        }
    }
}

impl RequestColumns {
    /// The input columns the loader requires in a request table header
    pub fn required(&self) -> [&str; 7] {
        [
            &self.application_type,
            &self.target_org,
            &self.branch_code,
            &self.section_gr_code,
            &self.area_code,
            &self.branch_name,
            &self.remarks,
        ]
    }

    /// Every mapped column name, input and derived
    pub fn all(&self) -> [&str; 10] {
        [
            &self.application_type,
            &self.target_org,
            &self.branch_code,
            &self.section_gr_code,
            &self.area_code,
            &self.branch_name,
            &self.remarks,
            &self.internal_sales_dept_code,
            &self.internal_sales_dept_name,
            &self.reference_bpr_target_flag,
        ]
    }
}

/// Column-name mapping for the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceColumns {
    pub branch_code_jinji: String,
    pub section_gr_code_jinji: String,
    pub area_code: String,
    pub parent_branch_code: String,
    pub bpr_target_flag: String,
    pub organization_name_kana: String,
}

impl Default for ReferenceColumns {
    fn default() -> Self {
        Self {
            branch_code_jinji: columns::BRANCH_CODE_JINJI.to_string(),
            section_gr_code_jinji: columns::SECTION_GR_CODE_JINJI.to_string(),
            area_code: columns::REFERENCE_AREA_CODE.to_string(),
            parent_branch_code: columns::PARENT_BRANCH_CODE.to_string(),
            bpr_target_flag: columns::BPR_TARGET_FLAG.to_string(),
            organization_name_kana: columns::ORGANIZATION_NAME_KANA.to_string(),
        }
    }
}

impl ReferenceColumns {
    /// Every mapped column name, all required in a reference table header
    pub fn all(&self) -> [&str; 6] {
        [
            &self.branch_code_jinji,
            &self.section_gr_code_jinji,
            &self.area_code,
            &self.parent_branch_code,
            &self.bpr_target_flag,
            &self.organization_name_kana,
        ]
    }
}

/// Configuration for a reconciliation run
///
/// Passed explicitly into the engine and CLI at construction time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Location of the reference snapshot, when file-backed
    pub reference_snapshot_path: Option<PathBuf>,

    /// Header mapping for the request table
    pub request_columns: RequestColumns,

    /// Header mapping for the reference table
    pub reference_columns: ReferenceColumns,
}

impl ReconcilerConfig {
    /// Create a configuration with canonical column names and no snapshot path
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference snapshot location
    pub fn with_reference_snapshot_path(mut self, path: PathBuf) -> Self {
        self.reference_snapshot_path = Some(path);
        self
    }

    /// Replace the request table column mapping
    pub fn with_request_columns(mut self, request_columns: RequestColumns) -> Self {
        self.request_columns = request_columns;
        self
    }

    /// Replace the reference table column mapping
    pub fn with_reference_columns(mut self, reference_columns: ReferenceColumns) -> Self {
        self.reference_columns = reference_columns;
        self
    }

    /// Validate the column mappings
    ///
    /// Column names must be non-empty and unique within each table.
    pub fn validate(&self) -> Result<()> {
        check_unique("request", &self.request_columns.all())?;
        check_unique("reference", &self.reference_columns.all())?;
        debug!("configuration validated");
        Ok(())
    }
}

fn check_unique(table: &str, names: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(Error::configuration(format!(
                "empty column name in {} table mapping",
                table
            )));
        }
        if !seen.insert(*name) {
            return Err(Error::configuration(format!(
                "duplicate column name '{}' in {} table mapping",
                name, table
            )));
        }
    }
    Ok(())
}
