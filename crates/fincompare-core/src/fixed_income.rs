use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinCompareError;
use crate::rates;
use crate::types::{Money, Percent, Rate};
use crate::FinCompareResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a recurring fixed-income investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedIncomeInput {
    /// Amount invested at the start of each month. For strategy comparisons
    /// this is the consortium's installment, so both plans cost the same
    /// per month.
    pub monthly_contribution: Money,
    /// Investment horizon in months.
    pub term_months: u32,
    /// Annual return rate as a percentage (10.0 = 10%).
    pub annual_return_pct: Percent,
}

/// Output of `project_fixed_income`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedIncomeResult {
    pub monthly_contribution: Money,
    /// Equivalent monthly compounding rate, as a fraction.
    pub monthly_rate: Rate,
    /// Accumulated balance at the end of each month (1..=term).
    pub balances: Vec<Money>,
    /// Balance after the final month.
    pub final_amount: Money,
    pub total_contributed: Money,
    pub investment_gains: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project a recurring monthly investment compounding at a fixed rate.
/// Each contribution is made at the start of the period, before that
/// period's compounding is applied.
pub fn project_fixed_income(input: &FixedIncomeInput) -> FinCompareResult<FixedIncomeResult> {
    validate(input)?;

    let monthly_rate = rates::annual_to_monthly(input.annual_return_pct)?;
    let growth = Decimal::ONE + monthly_rate;

    let mut balance = Decimal::ZERO;
    let mut balances = Vec::with_capacity(input.term_months as usize);
    for _ in 0..input.term_months {
        balance = (balance + input.monthly_contribution) * growth;
        balances.push(balance);
    }

    let final_amount = balance;
    let total_contributed = input.monthly_contribution * Decimal::from(input.term_months);
    let investment_gains = final_amount - total_contributed;

    Ok(FixedIncomeResult {
        monthly_contribution: input.monthly_contribution,
        monthly_rate,
        balances,
        final_amount,
        total_contributed,
        investment_gains,
    })
}

fn validate(input: &FixedIncomeInput) -> FinCompareResult<()> {
    if input.term_months == 0 {
        return Err(FinCompareError::InvalidInput {
            field: "term_months".into(),
            reason: "term must be at least 1 month".into(),
        });
    }
    if input.monthly_contribution < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "monthly_contribution".into(),
            reason: "monthly contribution must be non-negative".into(),
        });
    }
    if input.annual_return_pct < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "annual_return_pct".into(),
            reason: "return rate must be non-negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_input() -> FixedIncomeInput {
        FixedIncomeInput {
            monthly_contribution: dec!(1_000),
            term_months: 12,
            annual_return_pct: dec!(10),
        }
    }

    // ---------------------------------------------------------------
    // 1. First month: contribution compounds once
    // ---------------------------------------------------------------
    #[test]
    fn test_first_month_compounds_contribution() {
        let result = project_fixed_income(&default_input()).unwrap();

        let expected = dec!(1_000) * (Decimal::ONE + result.monthly_rate);
        assert_eq!(result.balances[0], expected);
    }

    // ---------------------------------------------------------------
    // 2. Balance is strictly increasing with a positive contribution
    // ---------------------------------------------------------------
    #[test]
    fn test_strictly_increasing() {
        let result = project_fixed_income(&default_input()).unwrap();

        assert_eq!(result.balances.len(), 12);
        let mut previous = Decimal::ZERO;
        for balance in &result.balances {
            assert!(*balance > previous);
            previous = *balance;
        }
        assert_eq!(result.final_amount, *result.balances.last().unwrap());
    }

    // ---------------------------------------------------------------
    // 3. Zero return rate accumulates contributions exactly
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let mut input = default_input();
        input.annual_return_pct = Decimal::ZERO;
        let result = project_fixed_income(&input).unwrap();

        assert_eq!(result.final_amount, dec!(12_000));
        assert_eq!(result.total_contributed, dec!(12_000));
        assert_eq!(result.investment_gains, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 4. Gains equal final amount minus contributions
    // ---------------------------------------------------------------
    #[test]
    fn test_gains_split() {
        let result = project_fixed_income(&default_input()).unwrap();

        assert_eq!(
            result.investment_gains,
            result.final_amount - result.total_contributed
        );
        assert!(result.investment_gains > Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 5. Contribute-then-compound beats compound-then-contribute
    // ---------------------------------------------------------------
    #[test]
    fn test_contribution_timing() {
        // With start-of-period contributions every deposit earns at least
        // one month of return, so the final amount must exceed an
        // end-of-period convention by exactly one month's growth.
        let result = project_fixed_income(&default_input()).unwrap();
        let growth = Decimal::ONE + result.monthly_rate;

        let mut end_of_period = Decimal::ZERO;
        for _ in 0..12 {
            end_of_period = end_of_period * growth + dec!(1_000);
        }
        let diff = (result.final_amount - end_of_period * growth).abs();
        assert!(diff < dec!(0.000001), "diff={}", diff);
    }

    // ---------------------------------------------------------------
    // 6. Zero contribution stays at zero without erroring
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_contribution() {
        let mut input = default_input();
        input.monthly_contribution = Decimal::ZERO;
        let result = project_fixed_income(&input).unwrap();

        assert_eq!(result.final_amount, Decimal::ZERO);
        assert!(result.balances.iter().all(|b| b.is_zero()));
    }

    // ---------------------------------------------------------------
    // 7. Input validation
    // ---------------------------------------------------------------
    #[test]
    fn test_validation() {
        let mut input = default_input();
        input.term_months = 0;
        assert!(project_fixed_income(&input).is_err());

        let mut input = default_input();
        input.monthly_contribution = dec!(-1);
        assert!(project_fixed_income(&input).is_err());

        let mut input = default_input();
        input.annual_return_pct = dec!(-1);
        assert!(project_fixed_income(&input).is_err());
    }
}
