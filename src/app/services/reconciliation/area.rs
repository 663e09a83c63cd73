//! Area-group resolution
//!
//! An AREA request names its group only inside free-text remarks. When
//! classification yields an area group, its code and name replace the
//! row's branch code and name; any other classification clears both.

use crate::app::models::{Classification, RequestRow, TargetOrg};
use crate::app::services::remarks_classifier::classify;
use crate::Result;
use indicatif::ProgressBar;
use tracing::{debug, info};

use super::stats::ReconciliationStats;

/// Resolve branch code and name for AREA rows from classified remarks
///
/// Re-running this operation on an already-resolved batch produces the
/// same result: classification reads only `remarks`, which no operation
/// rewrites.
pub fn resolve_area_groups(
    rows: &mut [RequestRow],
    stats: &mut ReconciliationStats,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    let mut resolved = 0usize;

    for row in rows.iter_mut() {
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }

        if row.target_org != TargetOrg::Area {
            continue;
        }

        match classify(row.remarks.as_deref()) {
            Classification::AreaGroup {
                group_code,
                group_name,
                ..
            } => {
                row.branch_code = group_code;
                row.branch_name = group_name;
                resolved += 1;
            }
            other => {
                debug!(
                    "AREA row remarks did not classify as an area group: {:?}",
                    other
                );
                row.branch_code = String::new();
                row.branch_name = String::new();
            }
        }
    }

    stats.area_groups_resolved = resolved;

    info!("area-group resolution complete: {} rows", resolved);
    Ok(())
}
