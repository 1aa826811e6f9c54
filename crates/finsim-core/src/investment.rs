use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{monthly_rate, project_growth, MAX_PROJECTION_YEARS, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, ProjectionPoint};
use crate::FinSimResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for an investment growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub initial_amount: Money,
    pub monthly_contribution: Money,
    /// Annual return as a percentage (8 = 8%).
    pub annual_return_pct: Percent,
    pub years: u32,
}

/// Output from `project_investment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOutput {
    pub final_value: Money,
    pub total_contributions: Money,
    pub total_gains: Money,
    /// Annual snapshots, years+1 points starting at year 0.
    pub projection: Vec<ProjectionPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project an investment balance under recurring monthly contributions and
/// a fixed annual return. Same recurrence as the savings projector, framed
/// in contribution/gain vocabulary.
pub fn project_investment(
    input: &InvestmentInput,
) -> FinSimResult<ComputationOutput<InvestmentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.annual_return_pct < Decimal::ZERO {
        warnings.push(format!(
            "Negative annual return ({}%); value will decay",
            input.annual_return_pct
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
    let rate = monthly_rate(input.annual_return_pct);

    let (final_value, projection) =
        project_growth(input.initial_amount, input.monthly_contribution, rate, months);

    let total_contributions =
        input.initial_amount + input.monthly_contribution * Decimal::from(months);
    let total_gains = final_value - total_contributions;

    let output = InvestmentOutput {
        final_value,
        total_contributions,
        total_gains,
        projection,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Investment growth (monthly compounding with level contributions)",
        &serde_json::json!({
            "initial_amount": input.initial_amount.to_string(),
            "monthly_contribution": input.monthly_contribution.to_string(),
            "annual_return_pct": input.annual_return_pct.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_input() -> InvestmentInput {
        InvestmentInput {
            initial_amount: dec!(5000),
            monthly_contribution: dec!(500),
            annual_return_pct: dec!(8),
            years: 20,
        }
    }

    #[test]
    fn test_twenty_year_growth() {
        let result = project_investment(&default_input()).unwrap();
        let out = &result.result;

        // 5000 + 500*240 = 125_000 contributed
        assert_eq!(out.total_contributions, dec!(125_000));
        // At 8% the gains should exceed the contributions over 20 years
        assert!(out.total_gains > out.total_contributions);
        assert_eq!(out.final_value, out.total_contributions + out.total_gains);
    }

    #[test]
    fn test_matches_savings_recurrence() {
        // Same numbers through the savings projector must agree exactly
        let inv = project_investment(&default_input()).unwrap();
        let sav = crate::savings::project_savings(&crate::savings::SavingsInput {
            initial_amount: dec!(5000),
            monthly_deposit: dec!(500),
            annual_rate_pct: dec!(8),
            years: 20,
        })
        .unwrap();

        assert_eq!(inv.result.final_value, sav.result.final_balance);
        assert_eq!(inv.result.projection, sav.result.projection);
    }

    #[test]
    fn test_zero_years_degenerate() {
        let mut input = default_input();
        input.years = 0;

        let result = project_investment(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.final_value, dec!(5000));
        assert_eq!(out.total_gains, Decimal::ZERO);
        assert_eq!(out.projection.len(), 1);
    }

    #[test]
    fn test_zero_contribution_pure_compounding() {
        let input = InvestmentInput {
            initial_amount: dec!(10_000),
            monthly_contribution: Decimal::ZERO,
            annual_return_pct: dec!(12),
            years: 1,
        };

        let result = project_investment(&input).unwrap();
        let out = &result.result;

        // 10_000 * 1.01^12 ~ 11_268.25
        assert!(
            out.final_value > dec!(11_268) && out.final_value < dec!(11_269),
            "final = {}",
            out.final_value
        );
    }

    #[test]
    fn test_negative_contribution_drawdown() {
        // Withdrawals flow through the same primitive
        let input = InvestmentInput {
            initial_amount: dec!(10_000),
            monthly_contribution: dec!(-100),
            annual_return_pct: Decimal::ZERO,
            years: 1,
        };

        let result = project_investment(&input).unwrap();
        assert_eq!(result.result.final_value, dec!(8800));
    }
}
