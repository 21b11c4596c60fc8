pub mod payment;
pub mod schedule;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FixedInterestError;
use crate::rates;
use crate::types::{Money, Percent, Rate, Years};
use crate::FixedInterestResult;

/// Terms of a fixed-rate amortising loan with monthly payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// Annual rate in percent (3.5 means 3.5%)
    pub rate_percent: Percent,
    pub years: Years,
    /// Due date of the first payment; later payments fall one calendar
    /// month after the previous one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
}

impl LoanTerms {
    /// Normalised monthly rate and period count for these terms.
    pub fn normalise(&self) -> FixedInterestResult<(Rate, u32)> {
        if self.principal <= Decimal::ZERO {
            return Err(FixedInterestError::InvalidInput {
                field: "principal".into(),
                reason: "Loan principal must be positive".into(),
            });
        }
        let monthly_rate = rates::monthly_rate(self.rate_percent)?;
        let months = rates::month_count(self.years)?;
        Ok((monthly_rate, months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalise() {
        let terms = LoanTerms {
            principal: dec!(250000),
            rate_percent: dec!(3.5),
            years: dec!(30),
            first_payment_date: None,
        };
        let (rate, months) = terms.normalise().unwrap();
        assert_eq!(months, 360);
        assert!((rate - dec!(0.0029166667)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_normalise_rejects_zero_principal() {
        let terms = LoanTerms {
            principal: Decimal::ZERO,
            rate_percent: dec!(3.5),
            years: dec!(30),
            first_payment_date: None,
        };
        assert!(terms.normalise().is_err());
    }

    #[test]
    fn test_normalise_rejects_tiny_term() {
        let terms = LoanTerms {
            principal: dec!(1000),
            rate_percent: dec!(5),
            years: dec!(0.01),
            first_payment_date: None,
        };
        assert!(matches!(
            terms.normalise(),
            Err(FixedInterestError::InvalidTerm { .. })
        ));
    }
}
