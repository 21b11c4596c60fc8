use fixed_interest_core::interest::{compound, simple};
use fixed_interest_core::FixedInterestError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Simple interest
// ===========================================================================

#[test]
fn test_simple_interest_reference_scenario() {
    let input = simple::SimpleInterestInput {
        principal: dec!(10000),
        rate_percent: dec!(5),
        time_years: dec!(3),
    };
    let result = simple::simple_interest(&input).unwrap().result;

    // 10000 * 0.05 * 3 = 1500; total 11500
    assert_eq!(result.principal, dec!(10000));
    assert_eq!(result.interest, dec!(1500));
    assert_eq!(result.total, dec!(11500));
}

#[test]
fn test_simple_interest_fractional_years() {
    let input = simple::SimpleInterestInput {
        principal: dec!(2000),
        rate_percent: dec!(4),
        time_years: dec!(1.5),
    };
    let result = simple::simple_interest(&input).unwrap().result;

    // 2000 * 0.04 * 1.5 = 120
    assert_eq!(result.interest, dec!(120));
}

#[test]
fn test_simple_interest_zero_time() {
    let input = simple::SimpleInterestInput {
        principal: dec!(2000),
        rate_percent: dec!(4),
        time_years: Decimal::ZERO,
    };
    let result = simple::simple_interest(&input).unwrap().result;
    assert_eq!(result.interest, Decimal::ZERO);
    assert_eq!(result.total, dec!(2000));
}

// ===========================================================================
// Compound interest
// ===========================================================================

#[test]
fn test_compound_interest_quarterly() {
    let input = compound::CompoundInterestInput {
        principal: dec!(10000),
        rate_percent: dec!(5),
        time_years: dec!(3),
        periods_per_year: 4,
    };
    let result = compound::compound_interest(&input).unwrap().result;

    // 10000 * (1 + 0.0125)^12 ≈ 11607.55
    assert!((result.amount - dec!(11607.55)).abs() < dec!(0.01));
    assert_eq!(result.amount - result.principal, result.interest);
}

#[test]
fn test_compound_interest_annual_zero_rate_is_identity() {
    let input = compound::CompoundInterestInput {
        principal: dec!(10000),
        rate_percent: Decimal::ZERO,
        time_years: dec!(7),
        periods_per_year: 1,
    };
    let result = compound::compound_interest(&input).unwrap().result;
    assert_eq!(result.amount, dec!(10000));
    assert_eq!(result.interest, Decimal::ZERO);
}

#[test]
fn test_compound_interest_daily_approaches_continuous() {
    let input = compound::CompoundInterestInput {
        principal: dec!(1000),
        rate_percent: dec!(5),
        time_years: dec!(1),
        periods_per_year: 365,
    };
    let result = compound::compound_interest(&input).unwrap().result;

    // Daily compounding at 5% for a year ≈ 1051.27 (e^0.05 ≈ 1051.27)
    assert!((result.amount - dec!(1051.27)).abs() < dec!(0.02));
}

#[test]
fn test_compound_interest_zero_frequency_fails() {
    let input = compound::CompoundInterestInput {
        principal: dec!(1000),
        rate_percent: dec!(5),
        time_years: dec!(1),
        periods_per_year: 0,
    };
    assert!(matches!(
        compound::compound_interest(&input),
        Err(FixedInterestError::InvalidCompoundingFrequency)
    ));
}

#[test]
fn test_compound_input_frequency_defaults_to_annual() {
    // periods_per_year defaults to 1 when absent from JSON input
    let input: compound::CompoundInterestInput = serde_json::from_str(
        r#"{"principal": "1000", "rate_percent": "10", "time_years": "2"}"#,
    )
    .unwrap();
    assert_eq!(input.periods_per_year, 1);

    let result = compound::compound_interest(&input).unwrap().result;
    // 1000 * 1.1^2 = 1210
    assert!((result.amount - dec!(1210)).abs() < dec!(0.01));
}
