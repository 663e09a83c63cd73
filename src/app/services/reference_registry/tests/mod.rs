//! Tests for the reference registry service


use crate::app::models::ReferenceRow;

/// Build a reference row with the fields the tests care about
pub fn create_reference_row(
    branch_code_jinji: &str,
    section_gr_code_jinji: &str,
    area_code: &str,
    bpr_target_flag: &str,
) -> ReferenceRow {
    ReferenceRow {
        branch_code_jinji: branch_code_jinji.to_string(),
        section_gr_code_jinji: section_gr_code_jinji.to_string(),
        area_code: area_code.to_string(),
        parent_branch_code: "90000".to_string(),
        bpr_target_flag: bpr_target_flag.to_string(),
        organization_name_kana: "テストシテン".to_string(),
    }
}
