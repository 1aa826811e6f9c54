use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{compound_factor, monthly_rate, MONTHS_PER_YEAR};
use crate::error::FinSimError;
use crate::types::{with_metadata, AmortizationRow, ComputationOutput, Money, Percent};
use crate::FinSimResult;

/// Number of amortization rows returned (first year of the schedule).
const SCHEDULE_MONTHS: u32 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a level-payment loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual rate as a percentage (4.5 = 4.5%).
    pub annual_rate_pct: Percent,
    pub years: u32,
}

/// Output from `amortize_loan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOutput {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    /// First `min(12, months)` periods of the amortization schedule.
    pub schedule: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute the level monthly payment for a loan via the standard annuity
/// formula, plus the first year of the amortization breakdown.
///
/// A zero rate falls back to straight-line repayment (`principal / months`),
/// and a degenerate annuity denominator takes the same branch, so the
/// result never carries a division by zero.
pub fn amortize_loan(input: &LoanInput) -> FinSimResult<ComputationOutput<LoanOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if input.principal <= Decimal::ZERO {
        return Err(FinSimError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be > 0".into(),
        });
    }
    if input.years == 0 {
        return Err(FinSimError::InvalidInput {
            field: "years".into(),
            reason: "years must be > 0".into(),
        });
    }

    let rate = monthly_rate(input.annual_rate_pct);
    let months = input.years * MONTHS_PER_YEAR;
    let months_dec = Decimal::from(months);

    let monthly_payment = if rate.is_zero() {
        input.principal / months_dec
    } else {
        let factor = compound_factor(rate, months);
        let denom = factor - Decimal::ONE;
        if denom.is_zero() {
            // Degenerate rate: same as the zero-rate branch
            input.principal / months_dec
        } else {
            input.principal * rate * factor / denom
        }
    };

    let total_paid = monthly_payment * months_dec;
    let total_interest = total_paid - input.principal;

    // Amortization breakdown, first year only
    let mut remaining_balance = input.principal;
    let mut schedule = Vec::with_capacity(SCHEDULE_MONTHS.min(months) as usize);

    for month in 1..=SCHEDULE_MONTHS.min(months) {
        let interest = remaining_balance * rate;
        let principal = monthly_payment - interest;
        remaining_balance -= principal;

        schedule.push(AmortizationRow {
            month,
            payment: monthly_payment,
            principal,
            interest,
            remaining_balance,
        });
    }

    let output = LoanOutput {
        monthly_payment,
        total_paid,
        total_interest,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Loan amortization (level-payment annuity, monthly compounding)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_input() -> LoanInput {
        LoanInput {
            principal: dec!(200_000),
            annual_rate_pct: dec!(4.5),
            years: 30,
        }
    }

    #[test]
    fn test_thirty_year_mortgage_payment() {
        let result = amortize_loan(&default_input()).unwrap();
        let out = &result.result;

        // Reference: 200k at 4.5% over 30 years ~ $1013.37/month
        assert!(
            out.monthly_payment > dec!(1013) && out.monthly_payment < dec!(1014),
            "payment = {}",
            out.monthly_payment
        );
    }

    #[test]
    fn test_total_paid_invariant() {
        let result = amortize_loan(&default_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.total_paid, out.monthly_payment * dec!(360));
        assert_eq!(out.total_interest, out.total_paid - dec!(200_000));
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let input = LoanInput {
            principal: dec!(12_000),
            annual_rate_pct: Decimal::ZERO,
            years: 1,
        };

        let result = amortize_loan(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.monthly_payment, dec!(1000));
        assert_eq!(out.total_interest, Decimal::ZERO);
        // Every row pays pure principal
        for row in &out.schedule {
            assert_eq!(row.interest, Decimal::ZERO);
            assert_eq!(row.principal, dec!(1000));
        }
    }

    #[test]
    fn test_schedule_capped_at_twelve_rows() {
        let result = amortize_loan(&default_input()).unwrap();
        assert_eq!(result.result.schedule.len(), 12);
    }

    #[test]
    fn test_short_loan_schedule_covers_all_months() {
        let input = LoanInput {
            principal: dec!(6000),
            annual_rate_pct: dec!(6),
            years: 1,
        };

        let result = amortize_loan(&input).unwrap();
        let schedule = &result.result.schedule;

        assert_eq!(schedule.len(), 12);
        // Final row should land at (approximately) zero remaining balance
        let last = schedule.last().unwrap();
        assert!(
            last.remaining_balance.abs() < dec!(0.01),
            "remaining = {}",
            last.remaining_balance
        );
    }

    #[test]
    fn test_balance_strictly_decreases() {
        let result = amortize_loan(&default_input()).unwrap();
        let schedule = &result.result.schedule;

        let mut prev = dec!(200_000);
        for row in schedule {
            assert!(row.remaining_balance < prev, "month {}", row.month);
            prev = row.remaining_balance;
        }
    }

    #[test]
    fn test_row_arithmetic_consistency() {
        let result = amortize_loan(&default_input()).unwrap();

        for row in &result.result.schedule {
            assert_eq!(row.payment, row.principal + row.interest);
        }
    }

    #[test]
    fn test_early_payments_are_interest_heavy() {
        let result = amortize_loan(&default_input()).unwrap();
        let first = &result.result.schedule[0];

        // Long-dated loan: month 1 interest dominates principal
        assert!(first.interest > first.principal);
    }

    #[test]
    fn test_validation_zero_principal() {
        let mut input = default_input();
        input.principal = Decimal::ZERO;
        assert!(amortize_loan(&input).is_err());
    }

    #[test]
    fn test_validation_zero_years() {
        let mut input = default_input();
        input.years = 0;
        assert!(amortize_loan(&input).is_err());
    }
}
