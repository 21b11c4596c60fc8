mod commands;
mod input;
mod interactive;
mod output;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rust_decimal::Decimal;
use std::process;

/// Fixed interest calculations from the command line
#[derive(Parser)]
#[command(
    name = "fic",
    version,
    about = "Fixed interest calculator",
    long_about = "A CLI for fixed-interest financial calculations with decimal precision. \
                  Supports simple interest, compound interest, fixed-rate loan payments, \
                  and full amortisation schedules with CSV export. Run with no arguments \
                  for the interactive menu."
)]
pub struct Cli {
    /// Calculation mode
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Principal amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 5 for 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Time in years (simple and compound modes)
    #[arg(long)]
    pub time: Option<Decimal>,

    /// Compounding periods per year (compound mode)
    #[arg(long, default_value_t = 1)]
    pub n: u32,

    /// Term in years (loan and amortization modes)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// First payment due date, YYYY-MM-DD (loan and amortization modes)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// CSV output path for the amortization schedule
    #[arg(long)]
    pub out: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Output format
    #[arg(long, default_value = "table")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    Simple,
    Compound,
    Loan,
    Amortization,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    // No arguments at all: drop into the interactive session
    if std::env::args().len() == 1 {
        process::exit(interactive::run_session());
    }

    let cli = Cli::parse();

    let mode = match cli.mode {
        Some(mode) => mode,
        None => {
            eprintln!(
                "{}: --mode is required (simple, compound, loan, amortization)",
                "error".red().bold()
            );
            process::exit(2);
        }
    };

    let result = match mode {
        Mode::Simple => commands::interest::run_simple(&cli),
        Mode::Compound => commands::interest::run_compound(&cli),
        Mode::Loan => commands::loan::run_loan(&cli),
        Mode::Amortization => commands::loan::run_amortization(&cli),
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
