//! Internal-sales resolution
//!
//! An INTERNAL_SALES request arrives with the department's own code in
//! `branch_code` and a compound name in `branch_name`. Resolution moves
//! the department code/name into their own columns and reduces the row to
//! its parent branch identity.

use crate::app::models::{RequestRow, TargetOrg};
use crate::app::services::branch_splitter::split_branch_name;
use crate::constants::INTERNAL_SALES_BRANCH_CODE_LEN;
use crate::Result;
use indicatif::ProgressBar;
use tracing::info;

use super::{stats::ReconciliationStats, truncate_chars};

/// Resolve code and name columns for INTERNAL_SALES rows
///
/// For each INTERNAL_SALES row: the full submitted code becomes the
/// department code, the compound name splits into branch name and
/// department name, and the branch code is truncated to its leading
/// 4 characters.
pub fn resolve_internal_sales(
    rows: &mut [RequestRow],
    stats: &mut ReconciliationStats,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    let mut resolved = 0usize;

    for row in rows.iter_mut() {
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }

        if row.target_org != TargetOrg::InternalSales {
            continue;
        }

        // Department code keeps the untruncated code
        row.internal_sales_dept_code = Some(row.branch_code.clone());

        let (branch_part, dept_part) = split_branch_name(Some(row.branch_name.as_str()));
        row.branch_name = branch_part.unwrap_or_default();
        row.internal_sales_dept_name = dept_part.unwrap_or_default();

        row.branch_code = truncate_chars(&row.branch_code, INTERNAL_SALES_BRANCH_CODE_LEN);
        resolved += 1;
    }

    stats.internal_sales_resolved = resolved;

    info!("internal-sales resolution complete: {} rows", resolved);
    Ok(())
}
