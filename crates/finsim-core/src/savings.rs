use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{monthly_rate, project_growth, MAX_PROJECTION_YEARS, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, ProjectionPoint};
use crate::FinSimResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a savings growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsInput {
    pub initial_amount: Money,
    pub monthly_deposit: Money,
    /// Annual rate as a percentage (5 = 5%).
    pub annual_rate_pct: Percent,
    pub years: u32,
}

/// Output from `project_savings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsOutput {
    pub final_balance: Money,
    pub total_deposits: Money,
    pub total_interest: Money,
    /// Annual snapshots, years+1 points starting at year 0.
    pub projection: Vec<ProjectionPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project a savings balance forward under level monthly deposits and a
/// fixed annual rate, compounded monthly.
///
/// Degenerate inputs produce degenerate results, not errors: `years = 0`
/// yields a single year-0 snapshot with zero interest, and a negative rate
/// simply decays the balance (flagged with a warning).
pub fn project_savings(input: &SavingsInput) -> FinSimResult<ComputationOutput<SavingsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.annual_rate_pct < Decimal::ZERO {
        warnings.push(format!(
            "Negative annual rate ({}%); balance will decay",
            input.annual_rate_pct
        ));
    }

    let years = if input.years > MAX_PROJECTION_YEARS {
        warnings.push(format!(
            "Projection horizon clamped to {} years (requested {})",
            MAX_PROJECTION_YEARS, input.years
        ));
        MAX_PROJECTION_YEARS
    } else {
        input.years
    };

    let months = years * MONTHS_PER_YEAR;
    let rate = monthly_rate(input.annual_rate_pct);

    let (final_balance, projection) =
        project_growth(input.initial_amount, input.monthly_deposit, rate, months);

    let total_deposits = input.initial_amount + input.monthly_deposit * Decimal::from(months);
    let total_interest = final_balance - total_deposits;

    let output = SavingsOutput {
        final_balance,
        total_deposits,
        total_interest,
        projection,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Savings growth (monthly compounding with level deposits)",
        &serde_json::json!({
            "initial_amount": input.initial_amount.to_string(),
            "monthly_deposit": input.monthly_deposit.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
