use bpr_reconciler::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => {
            // Success - summaries have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("BPR Reconciler - Organizational Change Reconciliation");
    println!("=====================================================");
    println!();
    println!("Reconcile organizational-change request batches against a published");
    println!("reference snapshot and produce enriched rows for acceptance processing.");
    println!();
    println!("USAGE:");
    println!("    bpr-reconciler <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    reconcile   Reconcile a request batch (main command)");
    println!("    reference   Inspect a reference snapshot");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Reconcile a request batch:");
    println!("    bpr-reconciler reconcile --requests requests.csv \\");
    println!("                             --reference snapshot.csv --output enriched.csv");
    println!();
    println!("    # Inspect a reference snapshot and search by kana name:");
    println!("    bpr-reconciler reference --reference snapshot.csv --search シテン");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bpr-reconciler <COMMAND> --help");
}
