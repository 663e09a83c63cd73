//! Command-line argument definitions for the BPR reconciler
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the BPR reconciler
///
/// Reconciles organizational-change request batches against a published
/// reference snapshot, producing enriched rows for downstream acceptance
/// processing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bpr-reconciler",
    version,
    about = "Reconcile organizational-change requests against a published reference snapshot",
    long_about = "Classifies free-text remarks, splits compound branch names, propagates prior \
                  target flags from the reference snapshot, and resolves internal-sales, area, \
                  and section-group request rows. Inputs and outputs are CSV tables."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the BPR reconciler
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Reconcile a request batch against a reference snapshot (main command)
    Reconcile(ReconcileArgs),
    /// Inspect a reference snapshot: counts, duplicate keys, name search
    Reference(ReferenceArgs),
}

/// Arguments for the reconcile command (main batch processing)
#[derive(Debug, Clone, Parser)]
pub struct ReconcileArgs {
    /// Path to the request table CSV
    #[arg(
        short = 'r',
        long = "requests",
        value_name = "PATH",
        help = "Path to the request table CSV"
    )]
    pub requests_path: PathBuf,

    /// Path to the reference snapshot CSV
    #[arg(
        short = 's',
        long = "reference",
        value_name = "PATH",
        help = "Path to the reference snapshot CSV"
    )]
    pub reference_path: PathBuf,

    /// Path the enriched request table is written to
    ///
    /// Will be overwritten if it exists.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path for the enriched request table CSV"
    )]
    pub output_path: PathBuf,

    /// Log level for diagnostics on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level: trace, debug, info, warn, error"
    )]
    pub log_level: String,

    /// Suppress the summary and progress output
    #[arg(short = 'q', long = "quiet", help = "Suppress summary and progress output")]
    pub quiet: bool,

    /// Disable progress bars even on a terminal
    #[arg(long = "no-progress", help = "Disable progress bars")]
    pub no_progress: bool,
}

/// Arguments for the reference inspection command
#[derive(Debug, Clone, Parser)]
pub struct ReferenceArgs {
    /// Path to the reference snapshot CSV
    #[arg(
        short = 's',
        long = "reference",
        value_name = "PATH",
        help = "Path to the reference snapshot CSV"
    )]
    pub reference_path: PathBuf,

    /// List rows whose kana name contains this fragment
    #[arg(
        long = "search",
        value_name = "KANA",
        help = "List rows whose kana name contains this fragment"
    )]
    pub search: Option<String>,

    /// Log level for diagnostics on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: trace, debug, info, warn, error"
    )]
    pub log_level: String,
}
