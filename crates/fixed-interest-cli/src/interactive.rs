use colored::Colorize;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

use fixed_interest_core::interest::compound::{self, CompoundInterestInput};
use fixed_interest_core::interest::simple::{self, SimpleInterestInput};
use fixed_interest_core::loan::{payment, schedule, LoanTerms};

use crate::output::csv_out;
use crate::output::currency::format_currency;

/// Menu selection in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Simple,
    Compound,
    Loan,
    Amortization,
    Exit,
}

/// Session state: choosing from the menu, collecting the fields for a
/// chosen calculation, or finished.
enum SessionState {
    AwaitingChoice,
    AwaitingFields(MenuChoice),
    Done,
}

/// Why a calculation step ended without producing output.
#[derive(Debug)]
enum SessionError {
    /// stdin closed mid-prompt; ends the session
    EndOfInput,
    /// Non-numeric or otherwise unusable entry; back to the menu
    Malformed(String),
    /// The calculation itself rejected the inputs; back to the menu
    Calculation(String),
}

/// Run the prompt-driven session until the user exits or input ends.
/// Returns the process exit code.
pub fn run_session() -> i32 {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = SessionState::AwaitingChoice;

    println!("Fixed Interest Calculator - Interactive Mode");

    loop {
        state = match state {
            SessionState::AwaitingChoice => {
                print_menu();
                match prompt(&mut lines, "Enter choice: ") {
                    None => SessionState::Done,
                    Some(entry) => match parse_choice(&entry) {
                        Ok(MenuChoice::Exit) => {
                            println!("Goodbye");
                            SessionState::Done
                        }
                        Ok(choice) => SessionState::AwaitingFields(choice),
                        Err(message) => {
                            report(&message);
                            SessionState::AwaitingChoice
                        }
                    },
                }
            }
            SessionState::AwaitingFields(choice) => match run_choice(choice, &mut lines) {
                Ok(()) => SessionState::AwaitingChoice,
                Err(SessionError::EndOfInput) => SessionState::Done,
                Err(SessionError::Malformed(message))
                | Err(SessionError::Calculation(message)) => {
                    report(&message);
                    SessionState::AwaitingChoice
                }
            },
            SessionState::Done => break,
        };
    }

    0
}

fn print_menu() {
    println!("Choose an option:");
    println!(" 1) Simple Interest");
    println!(" 2) Compound Interest");
    println!(" 3) Loan monthly payment");
    println!(" 4) Amortization schedule (exportable)");
    println!(" 0) Exit");
}

fn report(message: &str) {
    eprintln!("{}: {}", "error".red().bold(), message);
}

/// Print a prompt and read the next line. None means end of input.
fn prompt<I>(lines: &mut I, label: &str) -> Option<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{label}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

fn parse_choice(entry: &str) -> Result<MenuChoice, String> {
    match entry.trim() {
        "1" => Ok(MenuChoice::Simple),
        "2" => Ok(MenuChoice::Compound),
        "3" => Ok(MenuChoice::Loan),
        "4" => Ok(MenuChoice::Amortization),
        "0" => Ok(MenuChoice::Exit),
        other => Err(format!("Invalid choice: '{other}'")),
    }
}

fn parse_decimal(field: &str, entry: &str) -> Result<Decimal, SessionError> {
    entry
        .trim()
        .parse::<Decimal>()
        .map_err(|_| SessionError::Malformed(format!("{field}: '{}' is not a number", entry.trim())))
}

fn parse_frequency(entry: &str) -> Result<u32, SessionError> {
    entry.trim().parse::<u32>().map_err(|_| {
        SessionError::Malformed(format!(
            "Compounding per year: '{}' is not a whole number",
            entry.trim()
        ))
    })
}

fn prompt_decimal<I>(lines: &mut I, label: &str, field: &str) -> Result<Decimal, SessionError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let entry = prompt(lines, label).ok_or(SessionError::EndOfInput)?;
    parse_decimal(field, &entry)
}

fn run_choice<I>(choice: MenuChoice, lines: &mut I) -> Result<(), SessionError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match choice {
        MenuChoice::Simple => {
            let input = SimpleInterestInput {
                principal: prompt_decimal(lines, "Principal: ", "Principal")?,
                rate_percent: prompt_decimal(lines, "Annual rate (%, e.g. 5): ", "Annual rate")?,
                time_years: prompt_decimal(lines, "Time (years): ", "Time")?,
            };
            let result = simple::simple_interest(&input)
                .map_err(|e| SessionError::Calculation(e.to_string()))?
                .result;
            println!("Interest: {}", format_currency(result.interest));
            println!("Total amount: {}", format_currency(result.total));
        }
        MenuChoice::Compound => {
            let principal = prompt_decimal(lines, "Principal: ", "Principal")?;
            let rate_percent = prompt_decimal(lines, "Annual rate (%, e.g. 5): ", "Annual rate")?;
            let time_years = prompt_decimal(lines, "Time (years): ", "Time")?;
            let frequency_entry = prompt(lines, "Compounding per year (1=annual,12=monthly): ")
                .ok_or(SessionError::EndOfInput)?;
            let input = CompoundInterestInput {
                principal,
                rate_percent,
                time_years,
                periods_per_year: parse_frequency(&frequency_entry)?,
            };
            let result = compound::compound_interest(&input)
                .map_err(|e| SessionError::Calculation(e.to_string()))?
                .result;
            println!("Amount: {}", format_currency(result.amount));
            println!("Interest earned: {}", format_currency(result.interest));
        }
        MenuChoice::Loan => {
            let terms = LoanTerms {
                principal: prompt_decimal(lines, "Loan principal: ", "Loan principal")?,
                rate_percent: prompt_decimal(lines, "Annual rate (%, e.g. 3.5): ", "Annual rate")?,
                years: prompt_decimal(lines, "Years: ", "Years")?,
                first_payment_date: None,
            };
            let result = payment::loan_payment(&terms)
                .map_err(|e| SessionError::Calculation(e.to_string()))?
                .result;
            println!("Monthly payment: {}", format_currency(result.monthly_payment));
            println!(
                "Total paid over {} months: {}",
                result.months,
                format_currency(result.total_paid)
            );
        }
        MenuChoice::Amortization => {
            let terms = LoanTerms {
                principal: prompt_decimal(lines, "Loan principal: ", "Loan principal")?,
                rate_percent: prompt_decimal(lines, "Annual rate (%, e.g. 3.5): ", "Annual rate")?,
                years: prompt_decimal(lines, "Years: ", "Years")?,
                first_payment_date: None,
            };
            let out = prompt(lines, "CSV filename to export (e.g. schedule.csv): ")
                .ok_or(SessionError::EndOfInput)?;
            let out = out.trim();
            if out.is_empty() {
                return Err(SessionError::Malformed(
                    "CSV filename must not be empty".into(),
                ));
            }

            let result = schedule::amortization_schedule(&terms)
                .map_err(|e| SessionError::Calculation(e.to_string()))?
                .result;
            csv_out::write_schedule_file(out, &result.rows)
                .map_err(|e| SessionError::Calculation(e.to_string()))?;
            println!("Schedule exported to {} (rows: {})", out, result.rows.len());
        }
        MenuChoice::Exit => unreachable!("exit is handled by the menu state"),
    }

    Ok(())
}
