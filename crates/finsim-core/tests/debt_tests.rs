use finsim_core::debt::{self, DebtPayoffInput, MAX_PAYOFF_MONTHS};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_debt_payoff_termination_payment_too_low() {
    // ~2%/month on 1000 accrues 20/month; a 10 payment can never win.
    // The loop must terminate immediately, well within the 600-month cap.
    let input = DebtPayoffInput {
        total_debt: dec!(1000),
        monthly_payment: dec!(10),
        annual_rate_pct: dec!(24),
    };
    let result = debt::simulate_debt_payoff(&input).unwrap();
    let out = &result.result;

    assert!(!out.payoff_possible);
    assert!(out.months < MAX_PAYOFF_MONTHS);
    assert_eq!(out.months, 0);
    assert_eq!(out.total_paid, Decimal::ZERO);
}

#[test]
fn test_debt_payoff_convergence() {
    // 1000 at 12% with 100/month clears in 11 payments
    let input = DebtPayoffInput {
        total_debt: dec!(1000),
        monthly_payment: dec!(100),
        annual_rate_pct: dec!(12),
    };
    let result = debt::simulate_debt_payoff(&input).unwrap();
    let out = &result.result;

    assert!(out.payoff_possible);
    assert_eq!(out.months, 11);
    assert!(out.total_paid >= dec!(1000));
    assert_eq!(out.total_interest, out.total_paid - dec!(1000));
}

#[test]
fn test_debt_payoff_reference_credit_card() {
    // 10k at 18% with 500/month: ~24 months, ~1978 interest
    let input = DebtPayoffInput {
        total_debt: dec!(10_000),
        monthly_payment: dec!(500),
        annual_rate_pct: dec!(18),
    };
    let result = debt::simulate_debt_payoff(&input).unwrap();
    let out = &result.result;

    assert!(out.payoff_possible);
    assert_eq!(out.years, 2);
    assert_eq!(out.remaining_months, 0);
    assert!(
        out.total_interest > dec!(1_900) && out.total_interest < dec!(2_100),
        "interest = {}",
        out.total_interest
    );
}

#[test]
fn test_debt_payoff_infeasibility_is_a_result_not_an_error() {
    let input = DebtPayoffInput {
        total_debt: dec!(50_000),
        monthly_payment: dec!(100),
        annual_rate_pct: dec!(29.99),
    };
    // Must be Ok: infeasibility is encoded in the result
    let result = debt::simulate_debt_payoff(&input).unwrap();
    assert!(!result.result.payoff_possible);
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_debt_payoff_months_decomposition() {
    let input = DebtPayoffInput {
        total_debt: dec!(5000),
        monthly_payment: dec!(150),
        annual_rate_pct: dec!(15),
    };
    let result = debt::simulate_debt_payoff(&input).unwrap();
    let out = &result.result;

    assert!(out.payoff_possible);
    assert_eq!(out.months, out.years * 12 + out.remaining_months);
    assert!(out.remaining_months < 12);
}

#[test]
fn test_debt_payoff_determinism() {
    let input = DebtPayoffInput {
        total_debt: dec!(7500),
        monthly_payment: dec!(325),
        annual_rate_pct: dec!(19.5),
    };
    let a = debt::simulate_debt_payoff(&input).unwrap();
    let b = debt::simulate_debt_payoff(&input).unwrap();

    assert_eq!(a.result.months, b.result.months);
    assert_eq!(a.result.total_paid, b.result.total_paid);
    assert_eq!(a.result.payoff_possible, b.result.payoff_possible);
}
