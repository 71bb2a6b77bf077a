use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinCompareError;
use crate::types::{Money, Percent, Rate};
use crate::FinCompareResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a pooled-credit (consortium) plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsortiumInput {
    /// Value of the asset being acquired.
    pub asset_value: Money,
    /// Plan duration in months.
    pub term_months: u32,
    /// Administrative fee as a fraction of the asset value (0.342 = 34.2%).
    pub admin_fee_rate: Rate,
    /// Bid funded from the plan's own credit (% of asset value).
    pub embedded_bid_pct: Percent,
    /// Bid paid from the participant's own resources (% of asset value).
    pub free_bid_pct: Percent,
}

/// Output of `simulate_consortium`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsortiumResult {
    /// Fixed monthly installment.
    pub monthly_installment: Money,
    /// Asset value plus administrative fee — what the plan charges in total.
    pub total_base_payable: Money,
    /// Administrative fee portion of the total payable.
    pub admin_fee_amount: Money,
    pub embedded_bid_amount: Money,
    pub free_bid_amount: Money,
    /// Credit actually extended to the participant after bids. Floored at 0.
    pub net_credit: Money,
    /// Total the participant pays out over the term. Floored at 0.
    pub total_paid: Money,
    /// Effective total cost: (total_paid / net_credit - 1) * 100.
    pub cet_pct: Percent,
    /// Cumulative contributions per month (1..=term), capped at total_paid.
    pub cumulative_contributions: Vec<Money>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate a consortium plan: installment, bid effects, net credit,
/// effective total cost and the cumulative contribution schedule.
pub fn simulate_consortium(input: &ConsortiumInput) -> FinCompareResult<ConsortiumResult> {
    validate(input)?;

    let total_base_payable = input.asset_value * (Decimal::ONE + input.admin_fee_rate);
    let monthly_installment = total_base_payable / Decimal::from(input.term_months);
    let admin_fee_amount = input.asset_value * input.admin_fee_rate;

    let embedded_bid_amount = input.asset_value * input.embedded_bid_pct / dec!(100);
    let free_bid_amount = input.asset_value * input.free_bid_pct / dec!(100);

    // Bids larger than the amounts they offset are floored, never negative.
    let total_paid =
        (total_base_payable - embedded_bid_amount - free_bid_amount).max(Decimal::ZERO);
    let net_credit = (input.asset_value - embedded_bid_amount - free_bid_amount).max(Decimal::ZERO);

    // Zero net credit cannot support a finite cost ratio; reported as 0.
    let cet_pct = if net_credit > Decimal::ZERO {
        (total_paid / net_credit - Decimal::ONE) * dec!(100)
    } else {
        Decimal::ZERO
    };

    // Capped at total_paid so accumulation never overshoots the known total.
    let cumulative_contributions = (1..=input.term_months)
        .map(|k| (monthly_installment * Decimal::from(k)).min(total_paid))
        .collect();

    Ok(ConsortiumResult {
        monthly_installment,
        total_base_payable,
        admin_fee_amount,
        embedded_bid_amount,
        free_bid_amount,
        net_credit,
        total_paid,
        cet_pct,
        cumulative_contributions,
    })
}

fn validate(input: &ConsortiumInput) -> FinCompareResult<()> {
    if input.term_months == 0 {
        return Err(FinCompareError::InvalidInput {
            field: "term_months".into(),
            reason: "term must be at least 1 month".into(),
        });
    }
    if input.asset_value < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "asset_value".into(),
            reason: "asset value must be non-negative".into(),
        });
    }
    if input.admin_fee_rate < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "admin_fee_rate".into(),
            reason: "administrative fee must be non-negative".into(),
        });
    }
    for (field, pct) in [
        ("embedded_bid_pct", input.embedded_bid_pct),
        ("free_bid_pct", input.free_bid_pct),
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
