//! Section-group resolution
//!
//! A SECTION_GROUP request names its internal sales department only inside
//! free-text remarks. The department name comes from classifying the
//! remarks; the department code comes from matching the raw remarks value
//! against the branch names of the batch's own INTERNAL_SALES rows.

use crate::app::models::{RequestRow, TargetOrg};
use crate::app::services::remarks_classifier::classify;
use crate::{Error, Result};
use indicatif::ProgressBar;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

use super::stats::ReconciliationStats;

/// Resolve department code and name for SECTION_GROUP rows with remarks
///
/// The code lookup uses the **raw** remarks string (no bullet stripping,
/// no classification) against the internal-sales branch names exactly as
/// they were submitted, so this operation must run before internal-sales
/// resolution rewrites those names. A remarks value with no matching
/// internal-sales row leaves the code null; that is expected, not an error.
///
/// # Errors
///
/// [`Error::DuplicateInternalSalesNames`] when two INTERNAL_SALES rows in
/// the batch share a branch name. The check runs before any lookup and
/// lists every duplicate: a corrupt batch must fail loudly, silently
/// picking one of the candidates is never acceptable.
pub fn resolve_section_groups(
    rows: &mut [RequestRow],
    stats: &mut ReconciliationStats,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    let code_by_name = build_internal_sales_index(rows)?;

    let mut with_remarks = 0usize;
    let mut codes_resolved = 0usize;

    for row in rows.iter_mut() {
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }

        if row.target_org != TargetOrg::SectionGroup {
            continue;
        }
        let Some(remarks) = row.remarks.clone() else {
            continue;
        };
        with_remarks += 1;

        let classification = classify(Some(remarks.as_str()));
        row.internal_sales_dept_name = classification.department_name().to_string();

        row.internal_sales_dept_code = code_by_name.get(&remarks).cloned();
        if row.internal_sales_dept_code.is_some() {
            codes_resolved += 1;
        } else {
            debug!("remarks '{}' matched no internal sales branch name", remarks);
        }
    }

    stats.section_groups_with_remarks = with_remarks;
    stats.section_group_codes_resolved = codes_resolved;

    info!(
        "section-group resolution complete: {}/{} dept codes resolved",
        codes_resolved, with_remarks
    );
    Ok(())
}

/// Index the batch's internal-sales rows by branch name
///
/// Fails when any branch name appears twice; the duplicates are reported
/// sorted so the error is deterministic.
fn build_internal_sales_index(rows: &[RequestRow]) -> Result<HashMap<String, String>> {
    let mut code_by_name = HashMap::new();
    let mut duplicates = BTreeSet::new();

    for row in rows
        .iter()
        .filter(|row| row.target_org == TargetOrg::InternalSales)
    {
        if code_by_name
            .insert(row.branch_name.clone(), row.branch_code.clone())
            .is_some()
        {
            duplicates.insert(row.branch_name.clone());
        }
    }

    if !duplicates.is_empty() {
        return Err(Error::duplicate_internal_sales_names(
            duplicates.into_iter().collect(),
        ));
    }

    Ok(code_by_name)
}
