use carcost_analyzer::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - results have already been reported by the command
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
    println!("Carcost Analyzer - Car Dataset Cost Comparison");
    println!("==============================================");
    println!();
    println!("Analyze tabular automobile datasets, aggregate per-brand price and");
    println!("seat totals, and rank manufacturers by average dollars per seat.");
    println!();
    println!("USAGE:");
    println!("    carcost-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    rank        Rank manufacturers by dollars per seat (main command)");
    println!("    records     List every parsed record in input order");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Rank brands in the default dataset (CarDataset.csv):");
    println!("    carcost-analyzer rank");
    println!();
    println!("    # Rank brands in a specific file, printing the top ten:");
    println!("    carcost-analyzer rank --input cars.csv --limit 10");
    println!();
    println!("    # Emit the ranking as JSON for scripting:");
    println!("    carcost-analyzer rank --input cars.csv --output-format json");
    println!();
    println!("    # List the parsed records:");
    println!("    carcost-analyzer records --input cars.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    carcost-analyzer <COMMAND> --help");
}
