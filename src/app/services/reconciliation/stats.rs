//! Reconciliation statistics and result structures
//!
//! This module provides types for tracking per-operation counts and
//! organizing the enriched batch for downstream acceptance processing.

use crate::app::models::RequestRow;

/// Statistics for one reconciliation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconciliationStats {
    /// Total number of input request rows
    pub total_input: usize,
    /// Rows with application type CHANGE or ABOLISH
    pub non_new_rows: usize,
    /// Non-NEW rows that found a reference counterpart
    pub reference_matched: usize,
    /// INTERNAL_SALES rows whose code/name were resolved
    pub internal_sales_resolved: usize,
    /// AREA rows whose remarks classified as an area group
    pub area_groups_resolved: usize,
    /// SECTION_GROUP rows that carried remarks
    pub section_groups_with_remarks: usize,
    /// SECTION_GROUP rows whose dept code matched an internal-sales row
    pub section_group_codes_resolved: usize,
    /// Number of non-fatal issues recorded during processing
    pub errors: usize,
    /// Specific issue messages for debugging
    pub error_messages: Vec<String>,
}

impl ReconciliationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a non-fatal issue
    pub fn add_error(&mut self, message: String) {
        self.errors += 1;
        self.error_messages.push(message);
    }

    /// Share of non-NEW rows that found a reference counterpart
    pub fn reference_match_rate(&self) -> f64 {
        if self.non_new_rows == 0 {
            100.0
        } else {
            (self.reference_matched as f64 / self.non_new_rows as f64) * 100.0
        }
    }

    /// Share of SECTION_GROUP rows with remarks that resolved a dept code
    pub fn section_group_resolution_rate(&self) -> f64 {
        if self.section_groups_with_remarks == 0 {
            100.0
        } else {
            (self.section_group_codes_resolved as f64 / self.section_groups_with_remarks as f64)
                * 100.0
        }
    }

    /// Get summary of the reconciliation run
    pub fn summary(&self) -> String {
        format!(
            "Reconciliation Summary: {} rows | non-NEW: {} ({:.1}% matched) | \
             internal sales: {} | area groups: {} | \
             section groups: {}/{} codes resolved | issues: {}",
            self.total_input,
            self.non_new_rows,
            self.reference_match_rate(),
            self.internal_sales_resolved,
            self.area_groups_resolved,
            self.section_group_codes_resolved,
            self.section_groups_with_remarks,
            self.errors
        )
    }
}

/// Result of one reconciliation run
#[derive(Debug, Clone)]
pub struct ReconciliationResult {
    /// The enriched request rows
    pub rows: Vec<RequestRow>,
    /// Statistics and issue information
    pub stats: ReconciliationStats,
}

impl ReconciliationResult {
    /// Create a new reconciliation result
    pub fn new(rows: Vec<RequestRow>, stats: ReconciliationStats) -> Self {
        Self { rows, stats }
    }

    /// Number of enriched rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
