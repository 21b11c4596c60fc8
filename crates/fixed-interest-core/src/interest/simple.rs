use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FixedInterestError;
use crate::rates;
use crate::types::*;
use crate::FixedInterestResult;

/// Input for a simple interest calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: Money,
    pub rate_percent: Percent,
    pub time_years: Years,
}

/// Simple interest result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleInterestOutput {
    pub principal: Money,
    pub interest: Money,
    pub total: Money,
}

/// Simple interest: principal × rate × time, no compounding.
pub fn simple_interest(
    input: &SimpleInterestInput,
) -> FixedInterestResult<ComputationOutput<SimpleInterestOutput>> {
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

    let rate = rates::annual_rate(input.rate_percent)?;
    if input.rate_percent > Decimal::ONE_HUNDRED {
        warnings.push("Rate above 100% per year; check the quoted rate".into());
    }

    let interest = input.principal * rate * input.time_years;
    let total = input.principal + interest;

    let output = SimpleInterestOutput {
        principal: input.principal,
        interest,
        total,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Simple Interest",
        &serde_json::json!({
            "rate_percent": input.rate_percent.to_string(),
            "time_years": input.time_years.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
