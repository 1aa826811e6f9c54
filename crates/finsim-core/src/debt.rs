use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{monthly_rate, MONTHS_PER_YEAR};
use crate::error::FinSimError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinSimResult;

/// Hard iteration cap: 50 years of monthly payments. A balance still open
/// after this many months is reported as not payable, never looped on.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a debt payoff simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoffInput {
    pub total_debt: Money,
    pub monthly_payment: Money,
    /// Annual interest rate as a percentage (18 = 18%).
    pub annual_rate_pct: Percent,
}

/// Output from `simulate_debt_payoff`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoffOutput {
    pub months: u32,
    pub years: u32,
    pub remaining_months: u32,
    pub total_paid: Money,
    pub total_interest: Money,
    /// False when the payment cannot retire the debt: either it fails to
    /// cover the accruing interest, or the 600-month cap was reached.
    pub payoff_possible: bool,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate paying a fixed monthly amount against an interest-bearing debt.
///
/// Two guards bound the loop, and both are normal outcomes rather than
/// errors: if the payment does not exceed the interest accruing in a month
/// the simulation stops before applying it (`payoff_possible = false`), and
/// the loop never runs past `MAX_PAYOFF_MONTHS`.
pub fn simulate_debt_payoff(
    input: &DebtPayoffInput,
) -> FinSimResult<ComputationOutput<DebtPayoffOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if input.total_debt <= Decimal::ZERO {
        return Err(FinSimError::InvalidInput {
            field: "total_debt".into(),
            reason: "total_debt must be > 0".into(),
        });
    }
    if input.monthly_payment <= Decimal::ZERO {
        return Err(FinSimError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "monthly_payment must be > 0".into(),
        });
    }

    let rate = monthly_rate(input.annual_rate_pct);

    let mut balance = input.total_debt;
    let mut months: u32 = 0;
    let mut total_paid = Decimal::ZERO;

    while balance > Decimal::ZERO && months < MAX_PAYOFF_MONTHS {
        let interest = balance * rate;

        // Payment must make progress against principal, otherwise the
        // balance can only grow and the loop would never converge.
        if input.monthly_payment <= interest {
            warnings.push(format!(
                "Monthly payment {} does not cover accruing interest {}; debt cannot be paid off",
                input.monthly_payment,
                interest.round_dp(2)
            ));
            break;
        }

        let principal = (input.monthly_payment - interest).min(balance);
        balance -= principal;
        total_paid += input.monthly_payment;
        months += 1;
    }

    let payoff_possible = balance <= Decimal::ZERO;
    if !payoff_possible && months == MAX_PAYOFF_MONTHS {
        warnings.push(format!(
            "Balance still open after {} months; simulation capped",
            MAX_PAYOFF_MONTHS
        ));
    }

    let output = DebtPayoffOutput {
        months,
        years: months / MONTHS_PER_YEAR,
        remaining_months: months % MONTHS_PER_YEAR,
        total_paid,
        total_interest: total_paid - input.total_debt,
        payoff_possible,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Debt payoff (fixed payment, monthly interest accrual)",
        &serde_json::json!({
            "total_debt": input.total_debt.to_string(),
            "monthly_payment": input.monthly_payment.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "max_months": MAX_PAYOFF_MONTHS,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
