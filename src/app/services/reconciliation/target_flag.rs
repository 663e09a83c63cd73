//! Prior target-flag propagation
//!
//! A CHANGE or ABOLISH request does not restate the target-flag attribute
//! of the organization it modifies; the flag is carried forward from the
//! matching reference row instead. NEW rows have no prior counterpart and
//! receive an empty flag without a lookup.

use crate::app::models::RequestRow;
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::{Error, Result};
use indicatif::ProgressBar;
use tracing::{debug, info};

use super::{stats::ReconciliationStats, strip_area_code_prefix};

/// Propagate reference target flags onto non-NEW request rows
///
/// Non-NEW rows are left-joined against the registry on
/// `(branch_code, section_gr_code, area_code)` after dropping the
/// application-side leading character from the area code. Matched rows
/// copy the reference `bpr_target_flag`; unmatched rows default to the
/// empty string.
///
/// # Errors
///
/// - [`Error::AreaCodeTooShort`] when a non-NEW row's area code cannot
///   carry the application-side prefix.
/// - [`Error::NoReferenceMatch`] when the non-NEW subset is non-empty but
///   not a single row found a reference counterpart. A batch of only NEW
///   rows never triggers this, even though its join result is empty.
pub fn propagate_target_flags(
    rows: &mut [RequestRow],
    registry: &ReferenceRegistry,
    stats: &mut ReconciliationStats,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    let mut non_new = 0usize;
    let mut matched = 0usize;

    for row in rows.iter_mut() {
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }

        if !row.application_type.requires_reference() {
            row.reference_bpr_target_flag = String::new();
            continue;
        }
        non_new += 1;

        let lookup_area = strip_area_code_prefix(&row.area_code)?;

        match registry.lookup(&row.branch_code, &row.section_gr_code, lookup_area) {
            Some(reference) => {
                row.reference_bpr_target_flag = reference.bpr_target_flag.clone();
                matched += 1;
            }
            None => {
                debug!(
                    "no reference row for ({}, {}, {})",
                    row.branch_code, row.section_gr_code, lookup_area
                );
                row.reference_bpr_target_flag = String::new();
            }
        }
    }

    debug!(
        "target-flag merge: {} request rows, {} non-NEW, {} matched",
        rows.len(),
        non_new,
        matched
    );

    if non_new > 0 && matched == 0 {
        return Err(Error::no_reference_match(non_new));
    }

    stats.non_new_rows = non_new;
    stats.reference_matched = matched;

    info!(
        "target-flag propagation complete: {}/{} non-NEW rows matched",
        matched, non_new
    );
    Ok(())
}
