use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finsim_core::loan::{self, LoanInput};

use crate::input;

/// Arguments for loan amortization
#[derive(Args)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate as a percentage (4.5 = 4.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };
    let result = loan::amortize_loan(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}
