//! Command implementations for the BPR reconciler CLI
//!
//! This module contains the command execution logic and reporting for the
//! CLI interface. Each command is implemented in its own module:
//! - `reconcile`: full request-batch reconciliation with CSV output
//! - `reference`: reference snapshot inspection and name search

pub mod reconcile;
pub mod reference;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner for the BPR reconciler
///
/// Dispatches to the appropriate subcommand handler.
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Reconcile(reconcile_args) => reconcile::run_reconcile(reconcile_args),
        Commands::Reference(reference_args) => reference::run_reference(reference_args),
    }
}
