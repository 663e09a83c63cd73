//! Main reconciliation engine and pipeline orchestration
//!
//! This module contains the ReconciliationEngine struct and coordinates the
//! four resolution operations over one request batch: target-flag
//! propagation, section-group resolution, internal-sales resolution, and
//! area-group resolution.

use crate::Result;
use crate::app::models::RequestRow;
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::config::ReconcilerConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{error, info};

use super::{
    area::resolve_area_groups,
    internal_sales::resolve_internal_sales,
    section_group::resolve_section_groups,
    stats::{ReconciliationResult, ReconciliationStats},
    target_flag::propagate_target_flags,
};

/// Reconciliation engine for organizational-change request batches
///
/// The engine holds a shared, read-only reference snapshot and the run
/// configuration. Each call to [`reconcile`](Self::reconcile) takes
/// ownership of its batch: that handoff is the private working copy. The
/// engine retains nothing across calls and the snapshot is never mutated,
/// so one engine may serve concurrent runs over different batches.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bpr_reconciler::app::services::reference_registry::ReferenceRegistry;
/// use bpr_reconciler::{ReconcilerConfig, ReconciliationEngine};
///
/// # fn example(requests: Vec<bpr_reconciler::RequestRow>) -> bpr_reconciler::Result<()> {
/// let (registry, _) = ReferenceRegistry::from_rows(Vec::new());
/// let engine = ReconciliationEngine::new(Arc::new(registry), ReconcilerConfig::default());
///
/// let result = engine.reconcile(requests, false)?;
/// println!("{}", result.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReconciliationEngine {
    /// Published reference snapshot, shared and read-only
    registry: Arc<ReferenceRegistry>,
    /// Run configuration
    config: ReconcilerConfig,
}

impl ReconciliationEngine {
    /// Create a new engine over a reference snapshot and configuration
    pub fn new(registry: Arc<ReferenceRegistry>, config: ReconcilerConfig) -> Self {
        Self { registry, config }
    }

    /// Run the full reconciliation pipeline over one request batch
    ///
    /// Operations run in a fixed order: target-flag propagation, section
    /// groups, internal sales, areas. Section-group resolution reads the
    /// batch's internal-sales branch names as submitted, so it runs before
    /// internal-sales resolution rewrites them.
    ///
    /// # Arguments
    ///
    /// * `requests` - Input request batch; the engine owns it for this call
    /// * `show_progress` - Whether to show progress bars per operation
    ///
    /// # Errors
    ///
    /// Data-integrity violations (no reference counterpart for a non-empty
    /// CHANGE/ABOLISH subset, an untranslatable area code, duplicate
    /// internal-sales branch names) abort the batch; the partially
    /// enriched working copy is dropped with the error.
    pub fn reconcile(
        &self,
        requests: Vec<RequestRow>,
        show_progress: bool,
    ) -> Result<ReconciliationResult> {
        let mut stats = ReconciliationStats::new();
        stats.total_input = requests.len();

        info!(
            "starting reconciliation pipeline for {} request rows against {} reference keys",
            requests.len(),
            self.registry.indexed_count()
        );

        let mut rows = requests;

        self.run_operation(&mut rows, &mut stats, show_progress, "Target flags", |r, s, pb| {
            propagate_target_flags(r, &self.registry, s, pb)
        })?;

        self.run_operation(&mut rows, &mut stats, show_progress, "Section groups", |r, s, pb| {
            resolve_section_groups(r, s, pb)
        })?;

        self.run_operation(&mut rows, &mut stats, show_progress, "Internal sales", |r, s, pb| {
            resolve_internal_sales(r, s, pb)
        })?;

        self.run_operation(&mut rows, &mut stats, show_progress, "Area groups", |r, s, pb| {
            resolve_area_groups(r, s, pb)
        })?;

        info!("reconciliation complete: {}", stats.summary());
        Ok(ReconciliationResult::new(rows, stats))
    }

    /// Run the pipeline with individual operations skipped
    ///
    /// Callers that stage their own pipeline can disable the operations
    /// they run elsewhere.
    pub fn reconcile_custom(
        &self,
        requests: Vec<RequestRow>,
        skip_target_flags: bool,
        skip_section_groups: bool,
        skip_internal_sales: bool,
        skip_area_groups: bool,
    ) -> Result<ReconciliationResult> {
        let mut stats = ReconciliationStats::new();
        stats.total_input = requests.len();

        info!(
            "starting custom reconciliation pipeline for {} request rows \
             (target_flags: {}, section_groups: {}, internal_sales: {}, area_groups: {})",
            requests.len(),
            !skip_target_flags,
            !skip_section_groups,
            !skip_internal_sales,
            !skip_area_groups
        );

        let mut rows = requests;

        if !skip_target_flags {
            propagate_target_flags(&mut rows, &self.registry, &mut stats, None)
                .inspect_err(|e| error!("target-flag propagation failed: {}", e))?;
        }
        if !skip_section_groups {
            resolve_section_groups(&mut rows, &mut stats, None)
                .inspect_err(|e| error!("section-group resolution failed: {}", e))?;
        }
        if !skip_internal_sales {
            resolve_internal_sales(&mut rows, &mut stats, None)
                .inspect_err(|e| error!("internal-sales resolution failed: {}", e))?;
        }
        if !skip_area_groups {
            resolve_area_groups(&mut rows, &mut stats, None)
                .inspect_err(|e| error!("area-group resolution failed: {}", e))?;
        }

        Ok(ReconciliationResult::new(rows, stats))
    }

    /// Get the reference registry used by this engine
    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    /// Get the configuration used by this engine
    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Run one operation with logging and an optional progress bar
    fn run_operation<F>(
        &self,
        rows: &mut [RequestRow],
        stats: &mut ReconciliationStats,
        show_progress: bool,
        operation: &str,
        f: F,
    ) -> Result<()>
    where
        F: FnOnce(
            &mut [RequestRow],
            &mut ReconciliationStats,
            Option<&ProgressBar>,
        ) -> Result<()>,
    {
        let pb = if show_progress {
            Some(Self::create_operation_progress_bar(
                rows.len() as u64,
                operation,
            ))
        } else {
            None
        };

        let result = f(rows, stats, pb.as_ref())
            .inspect_err(|e| error!("{} operation failed: {}", operation, e));

        if let Some(pb) = pb {
            pb.finish_with_message(format!("{} complete", operation));
        }

        result
    }

    /// Create a progress bar for a pipeline operation
    fn create_operation_progress_bar(total: u64, operation: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message(operation.to_string());
        pb
    }
}
