use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincompare_core::consortium::{simulate_consortium, ConsortiumInput};

/// Arguments for a standalone consortium simulation
#[derive(Args)]
pub struct ConsortiumArgs {
    /// Asset value
    #[arg(long)]
    pub value: Decimal,

    /// Plan duration in months
    #[arg(long)]
    pub term_months: u32,

    /// Administrative fee (% of asset value)
    #[arg(long, default_value = "0")]
    pub admin_fee_pct: Decimal,

    /// Embedded bid (% of asset value), reduces the credit received
    #[arg(long, default_value = "0")]
    pub embedded_bid_pct: Decimal,

    /// Free bid (% of asset value), paid from the participant's own resources
    #[arg(long, default_value = "0")]
    pub free_bid_pct: Decimal,
}

pub fn run_consortium(args: ConsortiumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = simulate_consortium(&ConsortiumInput {
        asset_value: args.value,
        term_months: args.term_months,
        admin_fee_rate: args.admin_fee_pct / Decimal::from(100),
        embedded_bid_pct: args.embedded_bid_pct,
        free_bid_pct: args.free_bid_pct,
    })?;
    Ok(serde_json::to_value(result)?)
}
