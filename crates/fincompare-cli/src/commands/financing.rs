use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincompare_core::financing::{simulate_financing, FinancingInput};

/// Arguments for a standalone loan simulation
#[derive(Args)]
pub struct FinancingArgs {
    /// Amount borrowed
    #[arg(long)]
    pub value: Decimal,

    /// Loan duration in months
    #[arg(long)]
    pub term_months: u32,

    /// Annual interest rate (%)
    #[arg(long, default_value = "0")]
    pub annual_rate_pct: Decimal,
}

pub fn run_financing(args: FinancingArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = simulate_financing(&FinancingInput {
        principal: args.value,
        term_months: args.term_months,
        annual_rate_pct: args.annual_rate_pct,
    })?;
    Ok(serde_json::to_value(result)?)
}
