use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincompare_core::comparison::{self, SimulationParameters};

use crate::input;

/// Arguments for the three-way strategy comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON parameter file (flags below are ignored when set)
    #[arg(long)]
    pub input: Option<String>,

    /// Asset value
    #[arg(long)]
    pub value: Option<Decimal>,

    /// Term in months, shared by all three strategies
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Consortium administrative fee (% of asset value)
    #[arg(long, default_value = "0")]
    pub admin_fee_pct: Decimal,

    /// Annual loan interest rate (%)
    #[arg(long, default_value = "0")]
    pub loan_rate_pct: Decimal,

    /// Embedded bid (% of asset value), reduces the credit received
    #[arg(long, default_value = "0")]
    pub embedded_bid_pct: Decimal,

    /// Free bid (% of asset value), paid from the participant's own resources
    #[arg(long, default_value = "0")]
    pub free_bid_pct: Decimal,

    /// Annual fixed-income return rate (%)
    #[arg(long, default_value = "0")]
    pub fixed_income_rate_pct: Decimal,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params: SimulationParameters = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let value = args
            .value
            .ok_or("--value is required (or pipe/--input a JSON parameter file)")?;
        let term_months = args
            .term_months
            .ok_or("--term-months is required (or pipe/--input a JSON parameter file)")?;
        SimulationParameters {
            value,
            term_months,
            admin_fee_pct: args.admin_fee_pct,
            loan_rate_pct: args.loan_rate_pct,
            embedded_bid_pct: args.embedded_bid_pct,
            free_bid_pct: args.free_bid_pct,
            fixed_income_rate_pct: args.fixed_income_rate_pct,
        }
    };

    let result = comparison::simulate(&params)?;
    Ok(serde_json::to_value(result)?)
}
