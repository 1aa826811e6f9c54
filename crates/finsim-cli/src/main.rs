mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::debt::DebtArgs;
use commands::forecast::{BudgetArgs, CashFlowArgs};
use commands::growth::{InvestmentArgs, RetirementArgs, SavingsArgs};
use commands::loan::LoanArgs;

/// Personal-finance simulation calculators
#[derive(Parser)]
#[command(
    name = "finsim",
    version,
    about = "Personal-finance simulation calculators",
    long_about = "Deterministic personal-finance simulators with decimal precision. \
                  Supports savings and investment growth projections, loan \
                  amortization, debt payoff, retirement projection, cash-flow \
                  forecasting, and budget-reduction scenarios."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project savings growth under monthly deposits
    Savings(SavingsArgs),
    /// Amortize a loan (level monthly payment + first-year schedule)
    Loan(LoanArgs),
    /// Budget-reduction savings scenario
    Budget(BudgetArgs),
    /// Project investment growth under monthly contributions
    Investment(InvestmentArgs),
    /// Simulate debt payoff under a fixed monthly payment
    Debt(DebtArgs),
    /// Project retirement savings over an age span
    Retirement(RetirementArgs),
    /// Forecast a running balance under constant net monthly flow
    CashFlow(CashFlowArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Savings(args) => commands::growth::run_savings(args),
        Commands::Loan(args) => commands::loan::run_loan(args),
        Commands::Budget(args) => commands::forecast::run_budget(args),
        Commands::Investment(args) => commands::growth::run_investment(args),
        Commands::Debt(args) => commands::debt::run_debt(args),
        Commands::Retirement(args) => commands::growth::run_retirement(args),
        Commands::CashFlow(args) => commands::forecast::run_cash_flow(args),
        Commands::Version => {
            println!("finsim {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
