use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finsim_core::investment::{self, InvestmentInput};
use finsim_core::retirement::{self, RetirementInput};
use finsim_core::savings::{self, SavingsInput};

use crate::input;

/// Arguments for the savings growth projector
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SavingsArgs {
    /// Starting balance
    #[arg(long)]
    pub initial_amount: Option<Decimal>,

    /// Deposit added each month (negative = withdrawal)
    #[arg(long)]
    pub monthly_deposit: Option<Decimal>,

    /// Annual rate as a percentage (5 = 5%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Projection horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the investment growth projector
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InvestmentArgs {
    /// Starting balance
    #[arg(long)]
    pub initial_amount: Option<Decimal>,

    /// Contribution added each month
    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Annual return as a percentage (8 = 8%)
    #[arg(long, alias = "return")]
    pub annual_return: Option<Decimal>,

    /// Projection horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the retirement projector
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RetirementArgs {
    /// Current age in years
    #[arg(long)]
    pub current_age: Option<u32>,

    /// Target retirement age in years
    #[arg(long)]
    pub retirement_age: Option<u32>,

    /// Savings accumulated so far
    #[arg(long)]
    pub current_savings: Option<Decimal>,

    /// Contribution added each month
    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Annual return as a percentage (7 = 7%)
    #[arg(long, alias = "return")]
    pub annual_return: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_savings(args: SavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let savings_input: SavingsInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SavingsInput {
            initial_amount: args.initial_amount.unwrap_or(Decimal::ZERO),
            monthly_deposit: args.monthly_deposit.unwrap_or(Decimal::ZERO),
            annual_rate_pct: args.annual_rate.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };
    let result = savings::project_savings(&savings_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_investment(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let investment_input: InvestmentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        InvestmentInput {
            initial_amount: args.initial_amount.unwrap_or(Decimal::ZERO),
            monthly_contribution: args.monthly_contribution.unwrap_or(Decimal::ZERO),
            annual_return_pct: args.annual_return.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };
    let result = investment::project_investment(&investment_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_retirement(args: RetirementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let retirement_input: RetirementInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RetirementInput {
            current_age: args
                .current_age
                .ok_or("--current-age is required (or provide --input)")?,
            retirement_age: args
                .retirement_age
                .ok_or("--retirement-age is required (or provide --input)")?,
            current_savings: args.current_savings.unwrap_or(Decimal::ZERO),
            monthly_contribution: args.monthly_contribution.unwrap_or(Decimal::ZERO),
            annual_return_pct: args.annual_return.unwrap_or(Decimal::ZERO),
        }
    };
    let result = retirement::project_retirement(&retirement_input)?;
    Ok(serde_json::to_value(result)?)
}
