use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FixedInterestError;
use crate::rates;
use crate::types::*;
use crate::FixedInterestResult;

/// Input for a compound interest calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: Money,
    pub rate_percent: Percent,
    pub time_years: Years,
    /// Compounding periods per year (1 = annual, 12 = monthly, 365 = daily)
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

fn default_periods_per_year() -> u32 {
    1
}

/// Compound interest result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestOutput {
    pub principal: Money,
    pub amount: Money,
    pub interest: Money,
}

/// Compound interest: amount = P × (1 + r/n)^(n·t).
pub fn compound_interest(
    input: &CompoundInterestInput,
) -> FixedInterestResult<ComputationOutput<CompoundInterestOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.principal < Decimal::ZERO {
        return Err(FixedInterestError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must not be negative".into(),
        });
    }
    if input.time_years < Decimal::ZERO {
        return Err(FixedInterestError::InvalidInput {
            field: "time".into(),
            reason: "Time must not be negative".into(),
        });
    }
    if input.periods_per_year == 0 {
        return Err(FixedInterestError::InvalidCompoundingFrequency);
    }

    let rate = rates::annual_rate(input.rate_percent)?;
    if input.rate_percent > Decimal::ONE_HUNDRED {
        warnings.push("Rate above 100% per year; check the quoted rate".into());
    }

    let amount = if rate.is_zero() {
        input.principal
    } else {
        let n = Decimal::from(input.periods_per_year);
        let periodic = rate / n;
        let exponent = n * input.time_years;
        input.principal * (Decimal::ONE + periodic).powd(exponent)
    };
    let interest = amount - input.principal;

    let output = CompoundInterestOutput {
        principal: input.principal,
        amount,
        interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound Interest",
        &serde_json::json!({
            "rate_percent": input.rate_percent.to_string(),
            "time_years": input.time_years.to_string(),
            "periods_per_year": input.periods_per_year,
        }),
        warnings,
        elapsed,
        output,
    ))
}
