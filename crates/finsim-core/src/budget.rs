use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinSimResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a budget-reduction scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    pub current_expenses: Money,
    /// Reduction as a percentage (20 = 20%). Expected 0-100, not enforced.
    pub reduction_pct: Percent,
    pub months: u32,
}

/// Output from `plan_budget_reduction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetOutput {
    pub new_expenses: Money,
    pub monthly_savings: Money,
    pub total_savings: Money,
    pub annual_savings: Money,
    pub percentage_reduction: Percent,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute the savings from reducing monthly expenses by a percentage.
/// Closed form, no compounding and no iteration.
pub fn plan_budget_reduction(input: &BudgetInput) -> FinSimResult<ComputationOutput<BudgetOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.reduction_pct < Decimal::ZERO || input.reduction_pct > dec!(100) {
        warnings.push(format!(
            "Reduction of {}% is outside the expected 0-100 range",
            input.reduction_pct
        ));
    }

    let new_expenses = input.current_expenses * (Decimal::ONE - input.reduction_pct / dec!(100));
    let monthly_savings = input.current_expenses - new_expenses;
    let total_savings = monthly_savings * Decimal::from(input.months);
    let annual_savings = monthly_savings * dec!(12);

    let output = BudgetOutput {
        new_expenses,
        monthly_savings,
        total_savings,
        annual_savings,
        percentage_reduction: input.reduction_pct,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Budget reduction (flat percentage, no compounding)",
        &serde_json::json!({
            "current_expenses": input.current_expenses.to_string(),
            "reduction_pct": input.reduction_pct.to_string(),
            "months": input.months,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
