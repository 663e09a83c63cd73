//! Application constants for the BPR reconciler
//!
//! This module contains the domain tokens, code widths, and default
//! column names used throughout the reconciliation pipeline.

// =============================================================================
// Organization Name Tokens
// =============================================================================

/// Token terminating the parent part of a compound branch name
pub const BRANCH_TOKEN: &str = "支店";

/// Token terminating a sales-department designator
pub const SALES_DEPT_TOKEN: &str = "営業部";

/// Suffix that closes an area-group name extracted from remarks
pub const AREA_GROUP_SUFFIX: &str = "Gr";

/// Full-width list bullet stripped from the head of a remarks value
pub const LEADING_BULLET: char = '・';

// =============================================================================
// Code Widths
// =============================================================================

/// Exact character length of an area-group code inside remarks
pub const AREA_GROUP_CODE_LEN: usize = 5;

/// Character length an internal-sales branch code is truncated to
pub const INTERNAL_SALES_BRANCH_CODE_LEN: usize = 4;

/// Minimum character length of an application-side area code
///
/// The application encodes one extra leading character that the reference
/// snapshot does not carry; a shorter code cannot be translated and is a
/// data-integrity condition.
pub const MIN_AREA_CODE_LEN: usize = 2;

// =============================================================================
// Enum Wire Codes
// =============================================================================

/// String codes for the application type of a request row
pub mod application_type {
    /// A newly opened organization
    pub const NEW: &str = "NEW";

    /// A renamed or otherwise changed organization
    pub const CHANGE: &str = "CHANGE";

    /// A closed organization
    pub const ABOLISH: &str = "ABOLISH";

    /// All recognized application type codes
    pub const ALL: &[&str] = &[NEW, CHANGE, ABOLISH];
}

/// String codes for the organization kind a request row targets
pub mod target_org {
    /// A branch or department
    pub const BRANCH: &str = "BRANCH";

    /// A section or group nested beneath a branch
    pub const SECTION_GROUP: &str = "SECTION_GROUP";

    /// An area grouping of branches
    pub const AREA: &str = "AREA";

    /// A sales department nested inside a branch
    pub const INTERNAL_SALES: &str = "INTERNAL_SALES";

    /// All recognized target organization codes
    pub const ALL: &[&str] = &[BRANCH, SECTION_GROUP, AREA, INTERNAL_SALES];
}

// =============================================================================
// Canonical Column Names
// =============================================================================

/// Default column names for the two tabular inputs
///
/// Upstream providers that use different headers remap them through
/// [`crate::config::ReconcilerConfig`]; these are the names the engine's
/// own output table always uses.
pub mod columns {
    pub const APPLICATION_TYPE: &str = "application_type";
    pub const TARGET_ORG: &str = "target_org";
    pub const BRANCH_CODE: &str = "branch_code";
    pub const SECTION_GR_CODE: &str = "section_gr_code";
    pub const AREA_CODE: &str = "area_code";
    pub const BRANCH_NAME: &str = "branch_name";
    pub const REMARKS: &str = "remarks";
    pub const INTERNAL_SALES_DEPT_CODE: &str = "internal_sales_dept_code";
    pub const INTERNAL_SALES_DEPT_NAME: &str = "internal_sales_dept_name";
    pub const REFERENCE_BPR_TARGET_FLAG: &str = "reference_bpr_target_flag";

    pub const BRANCH_CODE_JINJI: &str = "branch_code_jinji";
    pub const SECTION_GR_CODE_JINJI: &str = "section_gr_code_jinji";
    pub const REFERENCE_AREA_CODE: &str = "area_code";
    pub const PARENT_BRANCH_CODE: &str = "parent_branch_code";
    pub const BPR_TARGET_FLAG: &str = "bpr_target_flag";
    pub const ORGANIZATION_NAME_KANA: &str = "organization_name_kana";
}
