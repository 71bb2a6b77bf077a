use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::consortium::{self, ConsortiumInput, ConsortiumResult};
use crate::error::FinCompareError;
use crate::financing::{self, FinancingInput, FinancingResult};
use crate::fixed_income::{self, FixedIncomeInput, FixedIncomeResult};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinCompareResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The full parameter set for a three-way strategy comparison. All
/// percentage fields are user-facing percentages (34.2 = 34.2%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Value of the asset being acquired.
    pub value: Money,
    /// Shared term in months for all three strategies.
    pub term_months: u32,
    /// Consortium administrative fee (% of asset value).
    pub admin_fee_pct: Percent,
    /// Annual loan interest rate (%).
    pub loan_rate_pct: Percent,
    /// Embedded bid (% of asset value), reduces the credit received.
    #[serde(default)]
    pub embedded_bid_pct: Percent,
    /// Free bid (% of asset value), paid from the participant's own resources.
    #[serde(default)]
    pub free_bid_pct: Percent,
    /// Annual fixed-income return rate (%).
    pub fixed_income_rate_pct: Percent,
}

/// One month of the merged comparison view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month index, 1-based.
    pub month: u32,
    pub consortium_cumulative: Money,
    pub financing_cumulative: Money,
    pub fixed_income_balance: Money,
}

/// Output of `simulate`: the three per-strategy results, the cost ranking
/// between consortium and financing, and the aligned monthly series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub consortium: ConsortiumResult,
    pub financing: FinancingResult,
    pub fixed_income: FixedIncomeResult,
    /// Consortium costs no more than financing over the term. On a tie
    /// both flags are true. Fixed income is a savings outcome, not a cost,
    /// and is never ranked.
    pub consortium_is_cheapest: bool,
    pub financing_is_cheapest: bool,
    pub monthly: Vec<MonthlySnapshot>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Run all three strategies over the shared term and merge their schedules.
///
/// The fixed-income projection invests the consortium's installment each
/// month, so the consortium model always runs first.
pub fn simulate(
    params: &SimulationParameters,
) -> FinCompareResult<ComputationOutput<ComparisonSummary>> {
    let start = Instant::now();
    validate(params)?;
    let mut warnings: Vec<String> = Vec::new();

    let consortium = consortium::simulate_consortium(&ConsortiumInput {
        asset_value: params.value,
        term_months: params.term_months,
        admin_fee_rate: params.admin_fee_pct / dec!(100),
        embedded_bid_pct: params.embedded_bid_pct,
        free_bid_pct: params.free_bid_pct,
    })?;

    let financing = financing::simulate_financing(&FinancingInput {
        principal: params.value,
        term_months: params.term_months,
        annual_rate_pct: params.loan_rate_pct,
    })?;

    let fixed_income = fixed_income::project_fixed_income(&FixedIncomeInput {
        monthly_contribution: consortium.monthly_installment,
        term_months: params.term_months,
        annual_return_pct: params.fixed_income_rate_pct,
    })?;

    let total_bids = consortium.embedded_bid_amount + consortium.free_bid_amount;
    if params.value > Decimal::ZERO && consortium.net_credit.is_zero() {
        warnings.push(
            "bids consume the entire asset value — net credit floored at zero \
             and consortium CET reported as 0"
                .into(),
        );
    }
    if total_bids > consortium.total_base_payable {
        warnings.push("bids exceed the total payable — participant cost floored at zero".into());
    }

    let consortium_is_cheapest = consortium.total_paid <= financing.total_paid;
    let financing_is_cheapest = financing.total_paid <= consortium.total_paid;

    let monthly = (0..params.term_months as usize)
        .map(|i| MonthlySnapshot {
            month: i as u32 + 1,
            consortium_cumulative: consortium.cumulative_contributions[i],
            financing_cumulative: financing.cumulative_payments[i],
            fixed_income_balance: fixed_income.balances[i],
        })
        .collect();

    let summary = ComparisonSummary {
        consortium,
        financing,
        fixed_income,
        consortium_is_cheapest,
        financing_is_cheapest,
        monthly,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Consortium vs financing vs fixed income over a shared term \
         (CET = total paid / net value received - 1)",
        &serde_json::json!({
            "value": params.value.to_string(),
            "term_months": params.term_months,
            "admin_fee_pct": params.admin_fee_pct.to_string(),
            "loan_rate_pct": params.loan_rate_pct.to_string(),
            "embedded_bid_pct": params.embedded_bid_pct.to_string(),
            "free_bid_pct": params.free_bid_pct.to_string(),
            "fixed_income_rate_pct": params.fixed_income_rate_pct.to_string(),
        }),
        warnings,
        elapsed,
        summary,
    ))
}

/// Reject out-of-domain parameters before any model runs, so a failed
/// simulation never returns partial results.
pub fn validate(params: &SimulationParameters) -> FinCompareResult<()> {
    if params.term_months == 0 {
        return Err(FinCompareError::InvalidInput {
            field: "term_months".into(),
            reason: "term must be at least 1 month".into(),
        });
    }
    if params.value < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "value".into(),
            reason: "asset value must be non-negative".into(),
        });
    }
    for (field, pct) in [
        ("admin_fee_pct", params.admin_fee_pct),
        ("loan_rate_pct", params.loan_rate_pct),
        ("fixed_income_rate_pct", params.fixed_income_rate_pct),
    ] {
        if pct < Decimal::ZERO {
            return Err(FinCompareError::InvalidInput {
                field: field.into(),
                reason: "rate must be non-negative".into(),
            });
        }
    }
    for (field, pct) in [
        ("embedded_bid_pct", params.embedded_bid_pct),
        ("free_bid_pct", params.free_bid_pct),
    ] {
        if pct < Decimal::ZERO || pct > dec!(100) {
            return Err(FinCompareError::InvalidInput {
                field: field.into(),
                reason: "bid percentage must be between 0 and 100".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
