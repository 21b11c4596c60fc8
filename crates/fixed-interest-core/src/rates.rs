use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::FixedInterestError;
use crate::types::{Percent, Rate, Years};
use crate::FixedInterestResult;

pub const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

/// Annual percentage rate (5 means 5%) as a decimal rate per year.
///
/// Used directly for annual-period contexts (simple and compound
/// interest). A zero rate is valid.
pub fn annual_rate(rate_percent: Percent) -> FixedInterestResult<Rate> {
    if rate_percent < Decimal::ZERO {
        return Err(FixedInterestError::InvalidInput {
            field: "rate".into(),
            reason: "Interest rate must not be negative".into(),
        });
    }
    Ok(rate_percent / PERCENT_SCALE)
}

/// Annual percentage rate as a decimal rate per month, for loan and
/// amortisation contexts.
pub fn monthly_rate(rate_percent: Percent) -> FixedInterestResult<Rate> {
    Ok(annual_rate(rate_percent)? / MONTHS_PER_YEAR)
}

/// Number of monthly periods in a term of `years`.
///
/// Fractional terms round to the nearest whole month, ties rounding
/// half-up (`MidpointAwayFromZero`). Terms shorter than one month fail
/// with `InvalidTerm`.
pub fn month_count(years: Years) -> FixedInterestResult<u32> {
    let months = (years * MONTHS_PER_YEAR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if months < Decimal::ONE {
        return Err(FixedInterestError::InvalidTerm {
            periods: months.to_i64().unwrap_or(0),
        });
    }

    months.to_u32().ok_or_else(|| FixedInterestError::InvalidInput {
        field: "years".into(),
        reason: "Term is too long to express in months".into(),
    })
}
