//! Reconciliation engine for organizational-change request batches
//!
//! This module enriches a batch of request rows against the published
//! reference snapshot. It owns the batch for the duration of one call,
//! never mutates the snapshot, and hands back the enriched rows together
//! with per-operation statistics.
//!
//! # Architecture
//!
//! The module is organized into one file per operation:
//! - [`engine`] - Main ReconciliationEngine struct and pipeline orchestration
//! - [`target_flag`] - Prior target-flag propagation onto non-NEW rows
//! - [`section_group`] - Section-group resolution via remarks lookups
//! - [`internal_sales`] - Internal-sales code/name resolution
//! - [`area`] - Area-group resolution from classified remarks
//! - [`stats`] - Reconciliation statistics and result structures
//!
//! # Pipeline Order
//!
//! The full pipeline runs target-flag propagation, then section groups,
//! then internal sales, then areas. Section-group resolution matches raw
//! remarks against the batch's internal-sales branch names exactly as they
//! were submitted, so it must run before internal-sales resolution rewrites
//! those names.
//!
//! # Integrity Invariants
//!
//! Two conditions are fatal to the batch and surface as named errors
//! rather than silently degraded output: a non-empty CHANGE/ABOLISH subset
//! with no reference counterpart at all, and duplicate internal-sales
//! branch names inside one batch.

pub mod area;
pub mod engine;
pub mod internal_sales;
pub mod section_group;
pub mod stats;
pub mod target_flag;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::ReconciliationEngine;
pub use stats::{ReconciliationResult, ReconciliationStats};

// Re-export the operations for callers composing their own pipeline
pub use area::resolve_area_groups;
pub use internal_sales::resolve_internal_sales;
pub use section_group::resolve_section_groups;
pub use target_flag::propagate_target_flags;

use crate::constants::MIN_AREA_CODE_LEN;
use crate::{Error, Result};

/// Translate an application-side area code to the reference encoding
///
/// The application prepends one character the reference snapshot does not
/// carry; dropping it yields the join key. A code shorter than
/// [`MIN_AREA_CODE_LEN`] cannot be translated and is a data-integrity
/// condition, not something to guess around.
pub(crate) fn strip_area_code_prefix(area_code: &str) -> Result<&str> {
    // The second character starts the reference-side key; a code without
    // one is below MIN_AREA_CODE_LEN.
    match area_code.char_indices().nth(MIN_AREA_CODE_LEN - 1) {
        Some((idx, _)) => Ok(&area_code[idx..]),
        None => Err(Error::area_code_too_short(area_code)),
    }
}

/// Truncate a string to its first `max_chars` characters
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_strip_area_code_prefix_drops_one_char() {
        assert_eq!(strip_area_code_prefix("X1").unwrap(), "1");
        assert_eq!(strip_area_code_prefix("9123").unwrap(), "123");
    }

    #[test]
    fn test_strip_area_code_prefix_rejects_short_codes() {
        assert!(strip_area_code_prefix("").is_err());
        assert!(strip_area_code_prefix("X").is_err());
        assert_eq!(
            strip_area_code_prefix("1").unwrap_err().to_string(),
            "area code '1' is too short to strip the application-side prefix"
        );
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("123456", 4), "1234");
        assert_eq!(truncate_chars("123", 4), "123");
        assert_eq!(truncate_chars("あいうえお", 4), "あいうえ");
        assert_eq!(truncate_chars("", 4), "");
    }

    #[test]
    fn test_min_area_code_len_matches_guard() {
        // The guard rejects exactly the codes below the documented minimum
        assert!(MIN_AREA_CODE_LEN >= 2);
    }
}
