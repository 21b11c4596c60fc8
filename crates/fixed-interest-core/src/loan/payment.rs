use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FixedInterestError;
use crate::types::*;
use crate::FixedInterestResult;

use super::LoanTerms;

/// Loan payment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPaymentOutput {
    pub principal: Money,
    pub monthly_payment: Money,
    pub months: u32,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Fixed monthly payment for an amortising loan.
///
/// M = P·r / (1 − (1+r)^−N); straight-line P/N when the rate is zero.
/// Returned at full precision; callers round for display.
pub fn monthly_payment(terms: &LoanTerms) -> FixedInterestResult<Money> {
    let (monthly_rate, months) = terms.normalise()?;
    payment_for(terms.principal, monthly_rate, months)
}

/// Payment from an already-normalised monthly rate and period count.
pub(crate) fn payment_for(
    principal: Money,
    monthly_rate: Rate,
    months: u32,
) -> FixedInterestResult<Money> {
    if months == 0 {
        return Err(FixedInterestError::InvalidTerm { periods: 0 });
    }

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let one_plus_r = Decimal::ONE + monthly_rate;
    let factor = one_plus_r.powd(Decimal::from(months));
    if factor.is_zero() {
        return Err(FixedInterestError::DivisionByZero {
            context: "payment compounding factor".into(),
        });
    }

    let annuity_factor = Decimal::ONE - Decimal::ONE / factor;
    if annuity_factor.is_zero() {
        return Err(FixedInterestError::DivisionByZero {
            context: "payment annuity factor".into(),
        });
    }

    Ok(principal * monthly_rate / annuity_factor)
}

/// Loan mode: monthly payment plus lifetime totals.
pub fn loan_payment(
    terms: &LoanTerms,
) -> FixedInterestResult<ComputationOutput<LoanPaymentOutput>> {
    let start = Instant::now();

    let (monthly_rate, months) = terms.normalise()?;
    let payment = payment_for(terms.principal, monthly_rate, months)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total_paid = payment * Decimal::from(months);
    let total_interest = total_paid - terms.principal;

    let output = LoanPaymentOutput {
        principal: terms.principal,
        monthly_payment: payment,
        months,
        total_paid,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Loan Payment",
        &serde_json::json!({
            "rate_percent": terms.rate_percent.to_string(),
            "years": terms.years.to_string(),
            "months": months,
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
