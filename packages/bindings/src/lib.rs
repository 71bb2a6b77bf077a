use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate(params_json: String) -> NapiResult<String> {
    let params: fincompare_core::comparison::SimulationParameters =
        serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let output = fincompare_core::comparison::simulate(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Individual models
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_consortium(input_json: String) -> NapiResult<String> {
    let input: fincompare_core::consortium::ConsortiumInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincompare_core::consortium::simulate_consortium(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_financing(input_json: String) -> NapiResult<String> {
    let input: fincompare_core::financing::FinancingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincompare_core::financing::simulate_financing(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_fixed_income(input_json: String) -> NapiResult<String> {
    let input: fincompare_core::fixed_income::FixedIncomeInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincompare_core::fixed_income::project_fixed_income(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
