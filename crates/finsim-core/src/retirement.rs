use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{monthly_rate, project_growth, MAX_PROJECTION_YEARS, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinSimResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a retirement projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: Money,
    pub monthly_contribution: Money,
    /// Annual return as a percentage (7 = 7%).
    pub annual_return_pct: Percent,
}

/// Output from `project_retirement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementOutput {
    pub final_amount: Money,
    pub total_contributions: Money,
    pub total_growth: Money,
    pub years_to_retirement: u32,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project retirement savings over the span between the current age and the
/// retirement age, using the shared monthly growth recurrence.
///
/// `retirement_age <= current_age` is tolerated: the span is zero months
/// and the final amount equals the current savings.
pub fn project_retirement(
    input: &RetirementInput,
) -> FinSimResult<ComputationOutput<RetirementOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let mut years_to_retirement = input.retirement_age.saturating_sub(input.current_age);
    if years_to_retirement == 0 {
        warnings.push("Already at or past retirement age; no accumulation period".into());
    }
    if years_to_retirement > MAX_PROJECTION_YEARS {
        warnings.push(format!(
            "Projection horizon clamped to {} years (requested {})",
            MAX_PROJECTION_YEARS, years_to_retirement
        ));
        years_to_retirement = MAX_PROJECTION_YEARS;
    }

    let months = years_to_retirement * MONTHS_PER_YEAR;
    let rate = monthly_rate(input.annual_return_pct);

    // Annual snapshots are computed by the shared projector but not part of
    // this calculator's result shape.
    let (final_amount, _projection) =
        project_growth(input.current_savings, input.monthly_contribution, rate, months);

    let total_contributions =
        input.current_savings + input.monthly_contribution * Decimal::from(months);
    let total_growth = final_amount - total_contributions;

    let output = RetirementOutput {
        final_amount,
        total_contributions,
        total_growth,
        years_to_retirement,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement projection (age-bounded monthly compounding)",
        &serde_json::json!({
            "current_age": input.current_age,
            "retirement_age": input.retirement_age,
            "current_savings": input.current_savings.to_string(),
            "monthly_contribution": input.monthly_contribution.to_string(),
            "annual_return_pct": input.annual_return_pct.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
