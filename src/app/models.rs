//! Data models for BPR reconciliation
//!
//! This module contains the core data structures for representing pending
//! organizational-change requests, published reference snapshot entries,
//! and the structured classification of free-text remarks.

use crate::constants::{application_type, target_org};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Request-Side Enumerations
// =============================================================================

/// Kind of change a request row applies for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
    /// A newly opened organization
    New,
    /// A renamed or otherwise changed organization
    Change,
    /// A closed organization
    Abolish,
}

impl ApplicationType {
    /// Wire code of this application type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => application_type::NEW,
            Self::Change => application_type::CHANGE,
            Self::Abolish => application_type::ABOLISH,
        }
    }

    /// True for CHANGE and ABOLISH rows, which must have a prior
    /// reference counterpart
    pub fn requires_reference(self) -> bool {
        !matches!(self, Self::New)
    }
}

impl FromStr for ApplicationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            application_type::NEW => Ok(Self::New),
            application_type::CHANGE => Ok(Self::Change),
            application_type::ABOLISH => Ok(Self::Abolish),
            other => Err(Error::data_validation(format!(
                "unknown application type '{}' (expected one of {:?})",
                other,
                application_type::ALL
            ))),
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of organization a request row targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetOrg {
    /// A branch or department
    Branch,
    /// A section or group nested beneath a branch
    SectionGroup,
    /// An area grouping of branches
    Area,
    /// A sales department nested inside a branch
    InternalSales,
}

impl TargetOrg {
    /// Wire code of this target organization kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Branch => target_org::BRANCH,
            Self::SectionGroup => target_org::SECTION_GROUP,
            Self::Area => target_org::AREA,
            Self::InternalSales => target_org::INTERNAL_SALES,
        }
    }
}

impl FromStr for TargetOrg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            target_org::BRANCH => Ok(Self::Branch),
            target_org::SECTION_GROUP => Ok(Self::SectionGroup),
            target_org::AREA => Ok(Self::Area),
            target_org::INTERNAL_SALES => Ok(Self::InternalSales),
            other => Err(Error::data_validation(format!(
                "unknown target organization '{}' (expected one of {:?})",
                other,
                target_org::ALL
            ))),
        }
    }
}

impl fmt::Display for TargetOrg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request Row
// =============================================================================

/// One pending organizational-change request
///
/// Input attributes arrive from the upstream provider; the derived
/// attributes start empty/null and are filled in by the reconciliation
/// engine. `area_code` is never null inside a batch (it may be the empty
/// string). The engine owns the batch for the duration of one call and
/// never retains rows across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRow {
    /// Kind of change applied for
    pub application_type: ApplicationType,

    /// Kind of organization targeted
    pub target_org: TargetOrg,

    /// Fixed-width numeric organization code; mutable during reconciliation
    pub branch_code: String,

    /// Section/group code within the branch
    pub section_gr_code: String,

    /// Application-side area code; carries one extra leading character
    /// versus the reference encoding
    pub area_code: String,

    /// Organization name; may be a compound of branch and sub-unit
    pub branch_name: String,

    /// Free-text remarks from the originating department
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Derived: code of the internal sales department this row belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_sales_dept_code: Option<String>,

    /// Derived: name of the internal sales department this row belongs to
    #[serde(default)]
    pub internal_sales_dept_name: String,

    /// Derived: target flag carried over from the matched reference row
    #[serde(default)]
    pub reference_bpr_target_flag: String,
}

impl RequestRow {
    /// Create a request row with empty derived attributes
    pub fn new(
        application_type: ApplicationType,
        target_org: TargetOrg,
        branch_code: impl Into<String>,
        section_gr_code: impl Into<String>,
        area_code: impl Into<String>,
        branch_name: impl Into<String>,
        remarks: Option<String>,
    ) -> Self {
        Self {
            application_type,
            target_org,
            branch_code: branch_code.into(),
            section_gr_code: section_gr_code.into(),
            area_code: area_code.into(),
            branch_name: branch_name.into(),
            remarks,
            internal_sales_dept_code: None,
            internal_sales_dept_name: String::new(),
            reference_bpr_target_flag: String::new(),
        }
    }
}

// =============================================================================
// Reference Row
// =============================================================================

/// One published entry of the organizational hierarchy snapshot
///
/// Reference rows are read-only for the duration of a reconciliation run;
/// the snapshot is owned and refreshed by an external provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Personnel-system branch code
    pub branch_code_jinji: String,

    /// Personnel-system section/group code
    pub section_gr_code_jinji: String,

    /// Reference-side area code (no application prefix)
    pub area_code: String,

    /// Code of the parent branch, when nested
    pub parent_branch_code: String,

    /// Prior system-migration eligibility marker carried onto
    /// changed/abolished requests
    pub bpr_target_flag: String,

    /// Organization name in kana
    pub organization_name_kana: String,
}

// =============================================================================
// Remarks Classification
// =============================================================================

/// Structured classification of one free-text remarks value
///
/// Exactly one variant is populated per value. The field accessors return
/// the empty string when the value belongs to another variant, so callers
/// cannot distinguish "not this variant" from "this variant with empty
/// values" except via the tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// The remarks name a sales department beneath a branch
    SalesDepartmentAffiliation {
        branch_name: String,
        department_name: String,
    },

    /// The remarks name an area group with its code
    AreaGroup {
        group_code: String,
        group_name: String,
        established_date: String,
    },

    /// The remarks did not match a structured shape
    Other { raw_text: String },
}

impl Classification {
    /// Branch-name part of a sales-department affiliation
    pub fn branch_name(&self) -> &str {
        match self {
            Self::SalesDepartmentAffiliation { branch_name, .. } => branch_name,
            _ => "",
        }
    }

    /// Department-name part of a sales-department affiliation
    pub fn department_name(&self) -> &str {
        match self {
            Self::SalesDepartmentAffiliation {
                department_name, ..
            } => department_name,
            _ => "",
        }
    }

    /// Five-character code of an area group
    pub fn group_code(&self) -> &str {
        match self {
            Self::AreaGroup { group_code, .. } => group_code,
            _ => "",
        }
    }

    /// Name of an area group
    pub fn group_name(&self) -> &str {
        match self {
            Self::AreaGroup { group_name, .. } => group_name,
            _ => "",
        }
    }

    /// Establishment annotation of an area group, without parentheses
    pub fn established_date(&self) -> &str {
        match self {
            Self::AreaGroup {
                established_date, ..
            } => established_date,
            _ => "",
        }
    }

    /// Unclassified text
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Other { raw_text } => raw_text,
            _ => "",
        }
    }

    /// True when the remarks matched the sales-department pattern
    pub fn is_sales_department(&self) -> bool {
        matches!(self, Self::SalesDepartmentAffiliation { .. })
    }

    /// True when the remarks matched the area-group pattern
    pub fn is_area_group(&self) -> bool {
        matches!(self, Self::AreaGroup { .. })
    }

    /// True when the remarks matched neither pattern
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data helpers
    fn create_test_request() -> RequestRow {
        RequestRow::new(
            ApplicationType::Change,
            TargetOrg::Branch,
            "12345",
            "201",
            "X1",
            "八重洲通支店",
            Some("・八重洲通支店営業部".to_string()),
        )
    }

    fn create_test_reference() -> ReferenceRow {
        ReferenceRow {
            branch_code_jinji: "12345".to_string(),
            section_gr_code_jinji: "201".to_string(),
            area_code: "1".to_string(),
            parent_branch_code: "12000".to_string(),
            bpr_target_flag: "1".to_string(),
            organization_name_kana: "ヤエスドオリシテン".to_string(),
        }
    }

    mod application_type_tests {
        use super::*;

        #[test]
        fn test_from_str_round_trip() {
            for code in ["NEW", "CHANGE", "ABOLISH"] {
                let parsed = ApplicationType::from_str(code).unwrap();
                assert_eq!(parsed.as_str(), code);
                assert_eq!(format!("{}", parsed), code);
            }
        }

        #[test]
        fn test_from_str_trims_whitespace() {
            assert_eq!(
                ApplicationType::from_str(" NEW ").unwrap(),
                ApplicationType::New
            );
        }

        #[test]
        fn test_from_str_rejects_unknown() {
            assert!(ApplicationType::from_str("RENAME").is_err());
            assert!(ApplicationType::from_str("").is_err());
        }

        #[test]
        fn test_requires_reference() {
            assert!(!ApplicationType::New.requires_reference());
            assert!(ApplicationType::Change.requires_reference());
            assert!(ApplicationType::Abolish.requires_reference());
        }
    }

    mod target_org_tests {
        use super::*;

        #[test]
        fn test_from_str_round_trip() {
            for code in ["BRANCH", "SECTION_GROUP", "AREA", "INTERNAL_SALES"] {
                let parsed = TargetOrg::from_str(code).unwrap();
                assert_eq!(parsed.as_str(), code);
            }
        }

        #[test]
        fn test_from_str_rejects_unknown() {
            assert!(TargetOrg::from_str("DIVISION").is_err());
        }
    }

    mod request_row_tests {
        use super::*;

        #[test]
        fn test_new_starts_with_empty_derived_attributes() {
            let row = create_test_request();
            assert_eq!(row.internal_sales_dept_code, None);
            assert_eq!(row.internal_sales_dept_name, "");
            assert_eq!(row.reference_bpr_target_flag, "");
        }

        #[test]
        fn test_area_code_may_be_empty_string() {
            let row = RequestRow::new(
                ApplicationType::New,
                TargetOrg::Area,
                "",
                "",
                "",
                "",
                None,
            );
            assert_eq!(row.area_code, "");
        }
    }

    mod classification_tests {
        use super::*;

        #[test]
        fn test_accessors_on_sales_department() {
            let c = Classification::SalesDepartmentAffiliation {
                branch_name: "八重洲通支店".to_string(),
                department_name: "営業部".to_string(),
            };
            assert!(c.is_sales_department());
            assert_eq!(c.branch_name(), "八重洲通支店");
            assert_eq!(c.department_name(), "営業部");
            // Fields of the other variants read as empty
            assert_eq!(c.group_code(), "");
            assert_eq!(c.group_name(), "");
            assert_eq!(c.established_date(), "");
            assert_eq!(c.raw_text(), "");
        }

        #[test]
        fn test_accessors_on_area_group() {
            let c = Classification::AreaGroup {
                group_code: "41002".to_string(),
                group_name: "東日本第一Gr".to_string(),
                established_date: String::new(),
            };
            assert!(c.is_area_group());
            assert_eq!(c.group_code(), "41002");
            assert_eq!(c.group_name(), "東日本第一Gr");
            assert_eq!(c.branch_name(), "");
            assert_eq!(c.department_name(), "");
        }

        #[test]
        fn test_accessors_on_other() {
            let c = Classification::Other {
                raw_text: "free text".to_string(),
            };
            assert!(c.is_other());
            assert_eq!(c.raw_text(), "free text");
            assert_eq!(c.group_code(), "");
            assert_eq!(c.branch_name(), "");
        }

        #[test]
        fn test_empty_sales_department_keeps_its_tag() {
            // An anchor-less suffix yields empty fields without changing
            // the variant; only the tag separates this from Other.
            let c = Classification::SalesDepartmentAffiliation {
                branch_name: String::new(),
                department_name: String::new(),
            };
            assert!(c.is_sales_department());
            assert!(!c.is_other());
            assert_eq!(c.branch_name(), "");
            assert_eq!(c.department_name(), "");
        }
    }

    #[test]
    fn test_serde_serialization() {
        let row = create_test_request();
        let json = serde_json::to_string(&row).unwrap();
        let deserialized: RequestRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deserialized);

        let reference = create_test_reference();
        let json = serde_json::to_string(&reference).unwrap();
        let deserialized: ReferenceRow = serde_json::from_str(&json).unwrap();
        assert_eq!(reference, deserialized);

        let app_type: ApplicationType = serde_json::from_str("\"ABOLISH\"").unwrap();
        assert_eq!(app_type, ApplicationType::Abolish);
        let org: TargetOrg = serde_json::from_str("\"INTERNAL_SALES\"").unwrap();
        assert_eq!(org, TargetOrg::InternalSales);
    }
}
