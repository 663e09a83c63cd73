//! Reconcile command implementation
//!
//! Loads the request and reference tables, runs the full reconciliation
//! pipeline, writes the enriched table, and reports a summary.

use crate::app::adapters::csv_tables;
use crate::app::services::reconciliation::{ReconciliationEngine, ReconciliationResult};
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::cli::args::ReconcileArgs;
use crate::config::ReconcilerConfig;
use crate::Result;
use colored::*;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::shared;

/// Run the reconcile command
pub fn run_reconcile(args: ReconcileArgs) -> Result<()> {
    shared::setup_logging(&args.log_level, args.quiet)?;

    let config =
        ReconcilerConfig::new().with_reference_snapshot_path(args.reference_path.clone());
    config.validate()?;

    let requests = csv_tables::load_request_table(&args.requests_path, &config.request_columns)?;
    let reference_rows =
        csv_tables::load_reference_table(&args.reference_path, &config.reference_columns)?;

    let (registry, load_stats) = ReferenceRegistry::from_rows(reference_rows);
    info!("{}", load_stats.summary());

    let engine = ReconciliationEngine::new(Arc::new(registry), config.clone());
    let show_progress = !args.no_progress && !args.quiet;
    let result = engine.reconcile(requests, show_progress)?;

    csv_tables::write_request_table(&args.output_path, &result.rows, &config.request_columns)?;

    if !args.quiet {
        print_summary(&result, &args.output_path);
    }
    Ok(())
}

/// Print the run summary to stdout
fn print_summary(result: &ReconciliationResult, output_path: &Path) {
    let stats = &result.stats;

    println!("\n{}", "Reconciliation Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Rows processed:".bright_cyan(),
        stats.total_input.to_string().bright_white().bold()
    );
    println!(
        "  {} {} of {} non-NEW rows matched a reference entry",
        "Target flags:".bright_cyan(),
        stats.reference_matched.to_string().bright_white(),
        stats.non_new_rows.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Internal sales resolved:".bright_cyan(),
        stats.internal_sales_resolved.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Area groups resolved:".bright_cyan(),
        stats.area_groups_resolved.to_string().bright_white()
    );
    println!(
        "  {} {} of {} with remarks",
        "Section group codes:".bright_cyan(),
        stats.section_group_codes_resolved.to_string().bright_white(),
        stats.section_groups_with_remarks.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        output_path.display()
    );
}
