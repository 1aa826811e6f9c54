use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finsim_core::budget::{self, BudgetInput};
use finsim_core::cash_flow::{self, CashFlowInput};

use crate::input;

/// Arguments for cash-flow forecasting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CashFlowArgs {
    /// Starting balance
    #[arg(long)]
    pub current_balance: Option<Decimal>,

    /// Income received each month
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Expenses paid each month
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Forecast horizon in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for budget-reduction scenarios
#[derive(Args)]
pub struct BudgetArgs {
    /// Current monthly expenses
    #[arg(long)]
    pub current_expenses: Option<Decimal>,

    /// Reduction as a percentage (20 = 20%)
    #[arg(long, alias = "reduction")]
    pub reduction_pct: Option<Decimal>,

    /// Number of months to accumulate savings over
    #[arg(long)]
    pub months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_cash_flow(args: CashFlowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cash_flow_input: CashFlowInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CashFlowInput {
            current_balance: args.current_balance.unwrap_or(Decimal::ZERO),
            monthly_income: args.monthly_income.unwrap_or(Decimal::ZERO),
            monthly_expenses: args.monthly_expenses.unwrap_or(Decimal::ZERO),
            months: args
                .months
                .ok_or("--months is required (or provide --input)")?,
        }
    };
    let result = cash_flow::forecast_cash_flow(&cash_flow_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_budget(args: BudgetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let budget_input: BudgetInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        BudgetInput {
            current_expenses: args
                .current_expenses
                .ok_or("--current-expenses is required (or provide --input)")?,
            reduction_pct: args.reduction_pct.unwrap_or(Decimal::ZERO),
            months: args
                .months
                .ok_or("--months is required (or provide --input)")?,
        }
    };
    let result = budget::plan_budget_reduction(&budget_input)?;
    Ok(serde_json::to_value(result)?)
}
