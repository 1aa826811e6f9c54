use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::MAX_FORECAST_MONTHS;
use crate::types::{with_metadata, ComputationOutput, Money, ProjectionPoint};
use crate::FinSimResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a cash-flow forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowInput {
    pub current_balance: Money,
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub months: u32,
}

/// Output from `forecast_cash_flow`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowOutput {
    pub final_balance: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_change: Money,
    /// Monthly snapshots, months+1 points starting at month 0.
    pub projection: Vec<ProjectionPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Forecast a running balance under a constant net monthly flow. Pure linear
/// arithmetic, no compounding.
pub fn forecast_cash_flow(input: &CashFlowInput) -> FinSimResult<ComputationOutput<CashFlowOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let months = if input.months > MAX_FORECAST_MONTHS {
        warnings.push(format!(
            "Forecast horizon clamped to {} months (requested {})",
            MAX_FORECAST_MONTHS, input.months
        ));
        MAX_FORECAST_MONTHS
    } else {
        input.months
    };

    let monthly_net = input.monthly_income - input.monthly_expenses;
    if monthly_net < Decimal::ZERO {
        warnings.push(format!(
            "Expenses exceed income by {} per month; balance declines",
            -monthly_net
        ));
    }

    let mut projection = Vec::with_capacity(months as usize + 1);
    for i in 0..=months {
        projection.push(ProjectionPoint {
            period: i,
            balance: input.current_balance + monthly_net * Decimal::from(i),
        });
    }

    let months_dec = Decimal::from(months);
    let final_balance = input.current_balance + monthly_net * months_dec;

    let output = CashFlowOutput {
        final_balance,
        total_income: input.monthly_income * months_dec,
        total_expenses: input.monthly_expenses * months_dec,
        net_change: final_balance - input.current_balance,
        projection,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Cash-flow forecast (constant net monthly flow, no compounding)",
        &serde_json::json!({
            "current_balance": input.current_balance.to_string(),
            "monthly_income": input.monthly_income.to_string(),
            "monthly_expenses": input.monthly_expenses.to_string(),
            "months": months,
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

    fn default_input() -> CashFlowInput {
        CashFlowInput {
            current_balance: dec!(5000),
            monthly_income: dec!(4000),
            monthly_expenses: dec!(3200),
            months: 12,
        }
    }

    #[test]
    fn test_positive_net_flow() {
        let result = forecast_cash_flow(&default_input()).unwrap();
        let out = &result.result;

        // 5000 + 800*12 = 14_600
        assert_eq!(out.final_balance, dec!(14_600));
        assert_eq!(out.total_income, dec!(48_000));
        assert_eq!(out.total_expenses, dec!(38_400));
        assert_eq!(out.net_change, dec!(9_600));
    }

    #[test]
    fn test_projection_is_months_plus_one() {
        let result = forecast_cash_flow(&default_input()).unwrap();
        let projection = &result.result.projection;

        assert_eq!(projection.len(), 13);
        assert_eq!(projection[0].period, 0);
        assert_eq!(projection[0].balance, dec!(5000));
        assert_eq!(projection[12].balance, result.result.final_balance);
    }

    #[test]
    fn test_surplus_is_strictly_increasing() {
        let result = forecast_cash_flow(&default_input()).unwrap();
        for pair in result.result.projection.windows(2) {
            assert!(pair[1].balance > pair[0].balance);
        }
    }

    #[test]
    fn test_break_even_is_constant() {
        let mut input = default_input();
        input.monthly_expenses = input.monthly_income;

        let result = forecast_cash_flow(&input).unwrap();
        for point in &result.result.projection {
            assert_eq!(point.balance, dec!(5000));
        }
        assert_eq!(result.result.net_change, Decimal::ZERO);
    }

    #[test]
    fn test_deficit_declines_with_warning() {
        let mut input = default_input();
        input.monthly_expenses = dec!(4500);

        let result = forecast_cash_flow(&input).unwrap();
        let out = &result.result;

        // 5000 - 500*12 = -1000: the forecast goes negative, it does not clamp
        assert_eq!(out.final_balance, dec!(-1000));
        for pair in out.projection.windows(2) {
            assert!(pair[1].balance < pair[0].balance);
        }
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_zero_months_single_point() {
        let mut input = default_input();
        input.months = 0;

        let result = forecast_cash_flow(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.projection.len(), 1);
        assert_eq!(out.final_balance, dec!(5000));
        assert_eq!(out.total_income, Decimal::ZERO);
        assert_eq!(out.net_change, Decimal::ZERO);
    }

    #[test]
    fn test_horizon_clamped() {
        let mut input = default_input();
        input.months = 10_000;

        let result = forecast_cash_flow(&input).unwrap();
        assert_eq!(
            result.result.projection.len(),
            MAX_FORECAST_MONTHS as usize + 1
        );
        assert!(result.warnings.iter().any(|w| w.contains("clamped")));
    }
}
