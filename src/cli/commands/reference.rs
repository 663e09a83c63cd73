//! Reference inspection command implementation
//!
//! Loads a reference snapshot and reports its shape: row and index counts,
//! duplicate composite keys, and an optional kana-name search.

use crate::app::adapters::csv_tables;
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::cli::args::ReferenceArgs;
use crate::config::ReconcilerConfig;
use crate::Result;
use colored::*;

use super::shared;

/// Run the reference inspection command
pub fn run_reference(args: ReferenceArgs) -> Result<()> {
    shared::setup_logging(&args.log_level, false)?;

    let config =
        ReconcilerConfig::new().with_reference_snapshot_path(args.reference_path.clone());
    config.validate()?;

    let rows = csv_tables::load_reference_table(&args.reference_path, &config.reference_columns)?;
    let (registry, _) = ReferenceRegistry::from_rows(rows);
    let metadata = registry.metadata();

    println!("{}", "Reference Snapshot".bright_green().bold());
    println!(
        "  {} {}",
        "Rows:".bright_cyan(),
        metadata.row_count.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Indexed keys:".bright_cyan(),
        metadata.indexed_count.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Duplicate keys:".bright_cyan(),
        metadata.duplicate_key_count.to_string().bright_white()
    );

    for key in registry.duplicate_keys() {
        println!(
            "    {} ({}, {}, {})",
            "duplicate".yellow(),
            key.branch_code, key.section_gr_code, key.area_code
        );
    }

    if let Some(fragment) = &args.search {
        let matches = registry.find_by_name_kana(fragment);
        println!(
            "\n{} '{}' ({} rows)",
            "Name search".bright_green().bold(),
            fragment,
            matches.len()
        );
        for row in matches {
            println!(
                "  {} {} / {} / {}  parent={}  flag={}",
                row.organization_name_kana.bright_white(),
                row.branch_code_jinji,
                row.section_gr_code_jinji,
                row.area_code,
                row.parent_branch_code,
                row.bpr_target_flag
            );
        }
    }

    Ok(())
}
