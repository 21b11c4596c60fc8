use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::*;
use crate::FixedInterestResult;

use super::{payment, LoanTerms};

const DISPLAY_DP: u32 = 2;

/// One row of an amortisation schedule. Monetary fields carry at most
/// two decimal places. The 1-based period serialises as `month` to match
/// the CSV export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "month")]
    pub period: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub payment: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub remaining_balance: Money,
}

/// Full amortisation schedule with lifetime totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub months: u32,
    /// The level payment; the final row's payment may differ from it.
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest_paid: Money,
    pub total_principal_paid: Money,
    pub rows: Vec<ScheduleRow>,
}

/// Build the month-by-month amortisation schedule for a loan.
///
/// Rounding policy: the level payment and every per-period figure are
/// rounded to two decimal places as they are computed, and the iteration
/// continues from the rounded balance. All schedule arithmetic is
/// therefore cent-quantised, and the balance reaches exactly zero in the
/// final period: a period whose principal share would overshoot the
/// balance is clamped to it, and the final period always settles whatever
/// remains, so its payment may differ from the level payment by a few
/// cents in either direction.
pub fn amortization_schedule(
    terms: &LoanTerms,
) -> FixedInterestResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let (monthly_rate, months) = terms.normalise()?;
    let level_payment = payment::payment_for(terms.principal, monthly_rate, months)?
        .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);

    if months > 600 {
        warnings.push(format!(
            "Term of {months} months exceeds 50 years; the schedule will be long"
        ));
    }

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = terms.principal;
    let mut total_paid = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;

    for period in 1..=months {
        let interest = (balance * monthly_rate)
            .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);

        let mut pay = level_payment;
        let mut principal_paid = pay - interest;

        // Accumulated rounding can push the principal share past the
        // balance before the scheduled end; the final period must settle
        // whatever is left either way.
        if principal_paid > balance || period == months {
            principal_paid = balance;
            pay = interest + principal_paid;
        }

        balance = (balance - principal_paid).max(Decimal::ZERO);

        total_paid += pay;
        total_interest += interest;
        total_principal += principal_paid;

        rows.push(ScheduleRow {
            period,
            payment_date: payment_date_for(terms.first_payment_date, period),
            payment: pay,
            principal_paid,
            interest_paid: interest,
            remaining_balance: balance,
        });
    }

    let output = AmortizationOutput {
        months,
        monthly_payment: level_payment,
        total_paid,
        total_interest_paid: total_interest,
        total_principal_paid: total_principal,
        rows,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortization Schedule",
        &serde_json::json!({
            "principal": terms.principal.to_string(),
            "rate_percent": terms.rate_percent.to_string(),
            "years": terms.years.to_string(),
            "months": months,
            "rounding": "2dp carried forward",
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Due date of the given 1-based period: the first payment date plus one
/// calendar month per elapsed period, end-of-month clamped by chrono.
fn payment_date_for(first: Option<NaiveDate>, period: u32) -> Option<NaiveDate> {
    first.and_then(|date| date.checked_add_months(Months::new(period - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_mortgage() -> LoanTerms {
        LoanTerms {
            principal: dec!(250000),
            rate_percent: dec!(3.5),
            years: dec!(30),
            first_payment_date: None,
        }
    }

    #[test]
    fn test_schedule_scenario_shape() {
        let result = amortization_schedule(&standard_mortgage()).unwrap().result;
        assert_eq!(result.rows.len(), 360);
        assert_eq!(result.monthly_payment, dec!(1122.61));

        // First month: interest = 250000 * 0.035/12 ≈ 729.17
        let first = &result.rows[0];
        assert_eq!(first.period, 1);
        assert_eq!(first.interest_paid, dec!(729.17));
        assert_eq!(first.principal_paid, dec!(393.44));

        let last = result.rows.last().unwrap();
        assert_eq!(last.period, 360);
        assert_eq!(last.remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_balance_monotonic_and_non_negative() {
        let result = amortization_schedule(&standard_mortgage()).unwrap().result;
        let mut previous = dec!(250000);
        for row in &result.rows {
            assert!(row.remaining_balance <= previous);
            assert!(row.remaining_balance >= Decimal::ZERO);
            previous = row.remaining_balance;
        }
    }

    #[test]
    fn test_principal_conservation() {
        let result = amortization_schedule(&standard_mortgage()).unwrap().result;
        assert_eq!(result.total_principal_paid, dec!(250000));

        let summed: Decimal = result.rows.iter().map(|r| r.principal_paid).sum();
        assert_eq!(summed, dec!(250000));
    }

    #[test]
    fn test_rows_balance_per_period() {
        let result = amortization_schedule(&standard_mortgage()).unwrap().result;
        for row in &result.rows {
            assert_eq!(row.payment, row.principal_paid + row.interest_paid);
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        let terms = LoanTerms {
            principal: dec!(1200),
            rate_percent: dec!(0),
            years: dec!(1),
            first_payment_date: None,
        };
        let result = amortization_schedule(&terms).unwrap().result;

        assert_eq!(result.rows.len(), 12);
        for row in &result.rows {
            assert_eq!(row.payment, dec!(100));
            assert_eq!(row.interest_paid, Decimal::ZERO);
        }
        assert_eq!(result.rows.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_final_payment_settles_residue() {
        // 1000 at 7% over 2 years: rounding the level payment down leaves
        // a residue the final month must settle exactly
        let terms = LoanTerms {
            principal: dec!(1000),
            rate_percent: dec!(7),
            years: dec!(2),
            first_payment_date: None,
        };
        let result = amortization_schedule(&terms).unwrap().result;
        let last = result.rows.last().unwrap();

        assert_eq!(last.remaining_balance, Decimal::ZERO);
        assert_eq!(last.payment, last.interest_paid + last.principal_paid);
        // Every earlier row pays the level amount
        for row in &result.rows[..result.rows.len() - 1] {
            assert_eq!(row.payment, result.monthly_payment);
        }
    }

    #[test]
    fn test_payment_dates_advance_monthly() {
        let terms = LoanTerms {
            principal: dec!(10000),
            rate_percent: dec!(5),
            years: dec!(0.25),
            first_payment_date: NaiveDate::from_ymd_opt(2026, 1, 31),
        };
        let result = amortization_schedule(&terms).unwrap().result;
        let dates: Vec<NaiveDate> = result
            .rows
            .iter()
            .map(|r| r.payment_date.unwrap())
            .collect();

        // End-of-month start clamps within shorter months
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
    }

    #[test]
    fn test_undated_schedule_has_no_dates() {
        let result = amortization_schedule(&standard_mortgage()).unwrap().result;
        assert!(result.rows.iter().all(|r| r.payment_date.is_none()));
    }

    #[test]
    fn test_long_term_warns() {
        let terms = LoanTerms {
            principal: dec!(100000),
            rate_percent: dec!(2),
            years: dec!(60),
            first_payment_date: None,
        };
        let output = amortization_schedule(&terms).unwrap();
        assert!(!output.warnings.is_empty());
        assert_eq!(output.result.rows.len(), 720);
    }
}
