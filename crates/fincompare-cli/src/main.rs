mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::consortium::ConsortiumArgs;
use commands::financing::FinancingArgs;
use commands::fixed_income::FixedIncomeArgs;

/// Compare strategies for acquiring an asset
#[derive(Parser)]
#[command(
    name = "fincmp",
    version,
    about = "Compare consortium, financing and fixed-income strategies",
    long_about = "A CLI for comparing three strategies for acquiring an asset over a \
                  fixed term, with decimal precision: a pooled-credit consortium plan, \
                  an amortizing loan, and investing the same installment in fixed income. \
                  Reports monthly schedules, totals and effective total cost (CET)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all three strategies over one term and rank them by cost
    Compare(CompareArgs),
    /// Simulate the consortium plan on its own
    Consortium(ConsortiumArgs),
    /// Simulate the amortizing loan on its own
    Financing(FinancingArgs),
    /// Project the recurring fixed-income investment on its own
    FixedIncome(FixedIncomeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Consortium(args) => commands::consortium::run_consortium(args),
        Commands::Financing(args) => commands::financing::run_financing(args),
        Commands::FixedIncome(args) => commands::fixed_income::run_fixed_income(args),
        Commands::Version => {
            println!("fincmp {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
