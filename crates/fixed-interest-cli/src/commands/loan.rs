use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use fixed_interest_core::loan::{payment, schedule, LoanTerms};
use fixed_interest_core::with_metadata;

use crate::input;
use crate::output::csv_out;
use crate::Cli;

/// Confirmation returned instead of the full schedule when exporting
#[derive(Serialize)]
struct ScheduleExport {
    exported_to: String,
    rows: usize,
    monthly_payment: Decimal,
    total_interest_paid: Decimal,
}

fn loan_terms(cli: &Cli, mode: &str) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    if let Some(ref path) = cli.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(data);
    }
    Ok(LoanTerms {
        principal: cli
            .principal
            .ok_or_else(|| format!("--principal is required for {mode} mode (or provide --input)"))?,
        rate_percent: cli
            .rate
            .ok_or_else(|| format!("--rate is required for {mode} mode (or provide --input)"))?,
        years: cli
            .years
            .ok_or_else(|| format!("--years is required for {mode} mode (or provide --input)"))?,
        first_payment_date: cli.start_date,
    })
}

pub fn run_loan(cli: &Cli) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = loan_terms(cli, "loan")?;
    let result = payment::loan_payment(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_amortization(cli: &Cli) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = loan_terms(cli, "amortization")?;
    let computed = schedule::amortization_schedule(&terms)?;

    // Export only once the schedule has been generated in full; a failed
    // generation never leaves a partial file behind.
    if let Some(ref path) = cli.out {
        csv_out::write_schedule_file(path, &computed.result.rows)?;

        let summary = ScheduleExport {
            exported_to: path.clone(),
            rows: computed.result.rows.len(),
            monthly_payment: computed.result.monthly_payment,
            total_interest_paid: computed.result.total_interest_paid,
        };
        let envelope = with_metadata(
            "Amortization Schedule (CSV export)",
            &computed.assumptions,
            computed.warnings.clone(),
            computed.metadata.computation_time_us,
            summary,
        );
        return Ok(serde_json::to_value(envelope)?);
    }

    Ok(serde_json::to_value(computed)?)
}
