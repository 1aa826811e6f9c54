use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finsim_core::debt::{self, DebtPayoffInput};

use crate::input;

/// Arguments for debt payoff simulation
#[derive(Args)]
pub struct DebtArgs {
    /// Outstanding debt balance
    #[arg(long)]
    pub total_debt: Option<Decimal>,

    /// Fixed payment made each month
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,

    /// Annual interest rate as a percentage (18 = 18%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_debt(args: DebtArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let debt_input: DebtPayoffInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        DebtPayoffInput {
            total_debt: args
                .total_debt
                .ok_or("--total-debt is required (or provide --input)")?,
            monthly_payment: args
                .monthly_payment
                .ok_or("--monthly-payment is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate.unwrap_or(Decimal::ZERO),
        }
    };
    let result = debt::simulate_debt_payoff(&debt_input)?;
    Ok(serde_json::to_value(result)?)
}
