//! Unit tests for the allocation advisor.

use super::*;
use crate::errors::Error;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn expected(result: &AllocationResult) -> Vec<(Instrument, u32, Decimal)> {
    result
        .iter()
        .map(|a| (a.instrument, a.percentage, a.amount))
        .collect()
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_low_income_high_debt_20000() {
    let result = suggest_investments(dec!(20000), "low_income_high_debt").unwrap();

    assert_eq!(result.category, Category::LowIncomeHighDebt);
    assert_eq!(
        expected(&result),
        vec![
            (Instrument::SavingsAccount, 40, dec!(8000.00)),
            (Instrument::FdRd, 40, dec!(8000.00)),
            (Instrument::PpfEpfSsy, 20, dec!(4000.00)),
            (Instrument::Gold, 0, dec!(0)),
            (Instrument::MutualFunds, 0, dec!(0)),
            (Instrument::Stocks, 0, dec!(0)),
        ]
    );
}

#[test]
fn test_young_professional_60000() {
    let result = suggest_investments(dec!(60000), "young_professional").unwrap();

    assert_eq!(
        expected(&result),
        vec![
            (Instrument::SavingsAccount, 5, dec!(3000)),
            (Instrument::FdRd, 15, dec!(9000)),
            (Instrument::PpfEpfSsy, 20, dec!(12000)),
            (Instrument::Gold, 10, dec!(6000)),
            (Instrument::MutualFunds, 45, dec!(27000)),
            (Instrument::Stocks, 5, dec!(3000)),
        ]
    );
}

#[test]
fn test_high_income_experienced_200000() {
    let result = suggest_investments(dec!(200000), "high_income_experienced").unwrap();

    assert_eq!(
        expected(&result),
        vec![
            (Instrument::SavingsAccount, 5, dec!(10000)),
            (Instrument::FdRd, 10, dec!(20000)),
            (Instrument::PpfEpfSsy, 5, dec!(10000)),
            (Instrument::Gold, 10, dec!(20000)),
            (Instrument::MutualFunds, 50, dec!(100000)),
            (Instrument::Stocks, 20, dec!(40000)),
        ]
    );
}

#[test]
fn test_unknown_category_is_rejected() {
    let err = suggest_investments(dec!(1000), "not_a_category").unwrap_err();
    assert!(matches!(err, Error::UnsupportedCategory(ref id) if id == "not_a_category"));
}

// ============================================================================
// Amount handling
// ============================================================================

#[test]
fn test_zero_savings_yields_zero_amounts() {
    let advisor = AllocationAdvisor::new();
    for category in Category::ALL {
        let result = advisor.suggest_for_category(Decimal::ZERO, category).unwrap();
        assert_eq!(result.allocations.len(), 6);
        assert!(result.iter().all(|a| a.amount.is_zero()));
    }
}

#[test]
fn test_negative_savings_is_rejected() {
    let err = suggest_investments(dec!(-500), "family_focused").unwrap_err();
    assert!(matches!(err, Error::InvalidAmount(_)));
}

#[test]
fn test_amounts_round_to_two_places() {
    // 1234.567 * 45% = 555.55515
    let result = suggest_investments(dec!(1234.567), "young_professional").unwrap();
    let mutual_funds = result.get(Instrument::MutualFunds).unwrap();
    assert_eq!(mutual_funds.amount, dec!(555.56));
    assert!(result.iter().all(|a| a.amount.scale() <= 2));
}

#[test]
fn test_midpoint_rounds_away_from_zero() {
    // 0.10 * 5% = 0.005
    let result = suggest_investments(dec!(0.10), "young_professional").unwrap();
    assert_eq!(result.get(Instrument::SavingsAccount).unwrap().amount, dec!(0.01));
}

#[test]
fn test_total_stays_within_rounding_tolerance() {
    let tolerance = Decimal::from_str_exact(crate::constants::ROUNDING_TOLERANCE).unwrap();
    let savings = dec!(333.33);
    for category in Category::ALL {
        let result = suggest_investments(savings, category.as_str()).unwrap();
        assert!((result.total_amount() - savings).abs() <= tolerance);
    }
}

#[test]
fn test_overflowing_amount_is_rejected() {
    let err = suggest_investments(Decimal::MAX, "high_income_experienced").unwrap_err();
    assert!(matches!(err, Error::InvalidAmount(_)));
}

// ============================================================================
// f64 boundary
// ============================================================================

#[test]
fn test_f64_boundary_matches_decimal_path() {
    let advisor = AllocationAdvisor::new();
    let from_float = advisor
        .suggest_investments_f64(20000.0, "low_income_high_debt")
        .unwrap();
    let from_decimal = advisor
        .suggest_investments(dec!(20000), "low_income_high_debt")
        .unwrap();
    assert_eq!(expected(&from_float), expected(&from_decimal));
}

#[test]
fn test_f64_non_finite_is_rejected() {
    let advisor = AllocationAdvisor::new();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = advisor
            .suggest_investments_f64(value, "senior_retired")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)), "{} accepted", value);
    }
}

#[test]
fn test_f64_unknown_category_reported_before_amount() {
    let err = AllocationAdvisor::new()
        .suggest_investments_f64(f64::NAN, "unknown")
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedCategory(_)));
}

// ============================================================================
// Parsing and serialization
// ============================================================================

#[test]
fn test_parse_monthly_savings() {
    assert_eq!(parse_monthly_savings(" 1250.50 ").unwrap(), dec!(1250.50));
    assert!(matches!(
        parse_monthly_savings("abc").unwrap_err(),
        Error::Validation(_)
    ));
    assert!(matches!(
        parse_monthly_savings("-1").unwrap_err(),
        Error::InvalidAmount(_)
    ));
}

#[test]
fn test_result_json_shape() {
    let result = suggest_investments(dec!(20000), "low_income_high_debt").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["category"], "low_income_high_debt");
    assert_eq!(json["allocations"][0]["instrument"], "Savings Account");
    assert_eq!(json["allocations"][0]["percentage"], 40);
    assert_eq!(json["allocations"][0]["amount"].as_f64(), Some(8000.0));
}

#[test]
fn test_profiles_exposes_full_table() {
    let profiles = AllocationAdvisor::new().profiles();
    assert_eq!(profiles.len(), 5);
    assert_eq!(profiles[1].category, Category::YoungProfessional);
}
