//! Tests for reconciliation statistics

use crate::app::services::reconciliation::stats::{ReconciliationResult, ReconciliationStats};

#[test]
fn test_new_stats_are_empty() {
    let stats = ReconciliationStats::new();
    assert_eq!(stats.total_input, 0);
    assert_eq!(stats.errors, 0);
    assert!(stats.error_messages.is_empty());
}

#[test]
fn test_add_error_tracks_message() {
    let mut stats = ReconciliationStats::new();
    stats.add_error("row 3 looked odd".to_string());
    stats.add_error("row 7 looked odd".to_string());

    assert_eq!(stats.errors, 2);
    assert_eq!(stats.error_messages.len(), 2);
    assert!(stats.error_messages[0].contains("row 3"));
}

#[test]
fn test_reference_match_rate() {
    let stats = ReconciliationStats {
        non_new_rows: 4,
        reference_matched: 3,
        ..Default::default()
    };
    assert!((stats.reference_match_rate() - 75.0).abs() < f64::EPSILON);

    // No non-NEW rows means nothing could be unmatched
    let empty = ReconciliationStats::new();
    assert!((empty.reference_match_rate() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_section_group_resolution_rate() {
    let stats = ReconciliationStats {
        section_groups_with_remarks: 2,
        section_group_codes_resolved: 1,
        ..Default::default()
    };
    assert!((stats.section_group_resolution_rate() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_summary_mentions_counts() {
    let stats = ReconciliationStats {
        total_input: 10,
        non_new_rows: 4,
        reference_matched: 4,
        internal_sales_resolved: 2,
        area_groups_resolved: 1,
        section_groups_with_remarks: 3,
        section_group_codes_resolved: 2,
        ..Default::default()
    };
    let summary = stats.summary();
    assert!(summary.contains("10 rows"));
    assert!(summary.contains("non-NEW: 4"));
    assert!(summary.contains("2/3 codes resolved"));
}

#[test]
fn test_result_wraps_rows_and_stats() {
    let stats = ReconciliationStats {
        total_input: 0,
        ..Default::default()
    };
    let result = ReconciliationResult::new(Vec::new(), stats);
    assert_eq!(result.row_count(), 0);
    assert!(result.summary().contains("0 rows"));
}
