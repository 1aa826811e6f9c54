use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Growth projectors
// ---------------------------------------------------------------------------

#[napi]
pub fn project_savings(input_json: String) -> NapiResult<String> {
    let input: finsim_core::savings::SavingsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::savings::project_savings(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_investment(input_json: String) -> NapiResult<String> {
    let input: finsim_core::investment::InvestmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::investment::project_investment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_retirement(input_json: String) -> NapiResult<String> {
    let input: finsim_core::retirement::RetirementInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::retirement::project_retirement(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loan and debt
// ---------------------------------------------------------------------------

#[napi]
pub fn amortize_loan(input_json: String) -> NapiResult<String> {
    let input: finsim_core::loan::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::loan::amortize_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_debt_payoff(input_json: String) -> NapiResult<String> {
    let input: finsim_core::debt::DebtPayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::debt::simulate_debt_payoff(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Forecasting
// ---------------------------------------------------------------------------

#[napi]
pub fn forecast_cash_flow(input_json: String) -> NapiResult<String> {
    let input: finsim_core::cash_flow::CashFlowInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::cash_flow::forecast_cash_flow(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn plan_budget_reduction(input_json: String) -> NapiResult<String> {
    let input: finsim_core::budget::BudgetInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finsim_core::budget::plan_budget_reduction(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
