//! Tests for area-group resolution

use super::{create_request, create_request_with_remarks};
use crate::app::models::{ApplicationType, TargetOrg};
use crate::app::services::reconciliation::{resolve_area_groups, stats::ReconciliationStats};

#[test]
fn test_area_group_remarks_set_code_and_name() {
    let mut rows = vec![create_request_with_remarks(
        ApplicationType::New,
        TargetOrg::Area,
        "00000",
        "",
        "41002 東日本第一Gr",
    )];
    let mut stats = ReconciliationStats::new();

    resolve_area_groups(&mut rows, &mut stats, None).unwrap();

    assert_eq!(rows[0].branch_code, "41002");
    assert_eq!(rows[0].branch_name, "東日本第一Gr");
    assert_eq!(stats.area_groups_resolved, 1);
}

#[test]
fn test_annotated_area_group_ignores_annotation_for_columns() {
    let mut rows = vec![create_request_with_remarks(
        ApplicationType::New,
        TargetOrg::Area,
        "00000",
        "",
        "41012　グローバル財務戦略Gr (4/1新設)",
    )];

    resolve_area_groups(&mut rows, &mut ReconciliationStats::new(), None).unwrap();

    assert_eq!(rows[0].branch_code, "41012");
    assert_eq!(rows[0].branch_name, "グローバル財務戦略Gr");
}

#[test]
fn test_unclassified_remarks_clear_code_and_name() {
    let mut rows = vec![create_request_with_remarks(
        ApplicationType::New,
        TargetOrg::Area,
        "00000",
        "既存名",
        "自由記述の備考",
    )];
    let mut stats = ReconciliationStats::new();

    resolve_area_groups(&mut rows, &mut stats, None).unwrap();

    assert_eq!(rows[0].branch_code, "");
    assert_eq!(rows[0].branch_name, "");
    assert_eq!(stats.area_groups_resolved, 0);
}

#[test]
fn test_absent_remarks_clear_code_and_name() {
    let mut rows = vec![create_request(
        ApplicationType::New,
        TargetOrg::Area,
        "00000",
        "既存名",
    )];

    resolve_area_groups(&mut rows, &mut ReconciliationStats::new(), None).unwrap();

    assert_eq!(rows[0].branch_code, "");
    assert_eq!(rows[0].branch_name, "");
}

#[test]
fn test_sales_department_remarks_on_area_row_clear_columns() {
    // Mutually exclusive classification: a sales-department match leaves
    // the area-group fields empty
    let mut rows = vec![create_request_with_remarks(
        ApplicationType::New,
        TargetOrg::Area,
        "00000",
        "既存名",
        "八重洲通支店営業部",
    )];

    resolve_area_groups(&mut rows, &mut ReconciliationStats::new(), None).unwrap();

    assert_eq!(rows[0].branch_code, "");
    assert_eq!(rows[0].branch_name, "");
}

#[test]
fn test_resolution_is_idempotent() {
    // Classification reads only remarks, so a second run over the mutated
    // row produces the identical result
    let mut rows = vec![create_request_with_remarks(
        ApplicationType::New,
        TargetOrg::Area,
        "00000",
        "",
        "41002 東日本第一Gr",
    )];

    resolve_area_groups(&mut rows, &mut ReconciliationStats::new(), None).unwrap();
    let first = rows.clone();
    resolve_area_groups(&mut rows, &mut ReconciliationStats::new(), None).unwrap();

    assert_eq!(rows, first);
}

#[test]
fn test_non_area_rows_are_untouched() {
    let mut rows = vec![create_request_with_remarks(
        ApplicationType::New,
        TargetOrg::Branch,
        "12345",
        "麹町支店",
        "41002 東日本第一Gr",
    )];

    resolve_area_groups(&mut rows, &mut ReconciliationStats::new(), None).unwrap();

    assert_eq!(rows[0].branch_code, "12345");
    assert_eq!(rows[0].branch_name, "麹町支店");
}
