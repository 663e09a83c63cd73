//! Tests for the reconciliation engine
//!
//! Shared fixture builders live here; per-operation tests in the
//! submodules.

pub mod area_tests;
pub mod stats_tests;

use crate::app::models::{ApplicationType, ReferenceRow, RequestRow, TargetOrg};
use crate::app::services::reconciliation::ReconciliationEngine;
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::config::ReconcilerConfig;
use std::sync::Arc;

/// Build a request row with empty remarks and default codes
pub fn create_request(
    application_type: ApplicationType,
    target_org: TargetOrg,
    branch_code: &str,
    branch_name: &str,
) -> RequestRow {
    RequestRow::new(
        application_type,
        target_org,
        branch_code,
        "201",
        "X1",
        branch_name,
        None,
    )
}

/// Build a request row carrying remarks
pub fn create_request_with_remarks(
    application_type: ApplicationType,
    target_org: TargetOrg,
    branch_code: &str,
    branch_name: &str,
    remarks: &str,
) -> RequestRow {
    RequestRow {
        remarks: Some(remarks.to_string()),
        ..create_request(application_type, target_org, branch_code, branch_name)
    }
}

/// Build a reference row keyed to match [`create_request`] defaults
pub fn create_reference(branch_code: &str, bpr_target_flag: &str) -> ReferenceRow {
    ReferenceRow {
        branch_code_jinji: branch_code.to_string(),
        section_gr_code_jinji: "201".to_string(),
        area_code: "1".to_string(),
        parent_branch_code: "90000".to_string(),
        bpr_target_flag: bpr_target_flag.to_string(),
        organization_name_kana: "テストシテン".to_string(),
    }
}

/// Build a registry over the given reference rows
pub fn create_registry(rows: Vec<ReferenceRow>) -> ReferenceRegistry {
    let (registry, _) = ReferenceRegistry::from_rows(rows);
    registry
}

/// Build an engine over the given reference rows with default config
pub fn create_engine(rows: Vec<ReferenceRow>) -> ReconciliationEngine {
    ReconciliationEngine::new(Arc::new(create_registry(rows)), ReconcilerConfig::default())
}
