use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincompare_core::fixed_income::{project_fixed_income, FixedIncomeInput};

/// Arguments for a standalone fixed-income projection
#[derive(Args)]
pub struct FixedIncomeArgs {
    /// Amount invested at the start of each month
    #[arg(long)]
    pub monthly_contribution: Decimal,

    /// Investment horizon in months
    #[arg(long)]
    pub term_months: u32,

    /// Annual return rate (%)
    #[arg(long, default_value = "0")]
    pub annual_return_pct: Decimal,
}

pub fn run_fixed_income(args: FixedIncomeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = project_fixed_income(&FixedIncomeInput {
        monthly_contribution: args.monthly_contribution,
        term_months: args.term_months,
        annual_return_pct: args.annual_return_pct,
    })?;
    Ok(serde_json::to_value(result)?)
}
