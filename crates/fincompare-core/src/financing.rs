use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinCompareError;
use crate::rates;
use crate::types::{Money, Percent, Rate};
use crate::FinCompareResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for an amortizing loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingInput {
    /// Amount borrowed (the asset value).
    pub principal: Money,
    /// Loan duration in months.
    pub term_months: u32,
    /// Annual nominal interest rate as a percentage (24.0 = 24%).
    pub annual_rate_pct: Percent,
}

/// Output of `simulate_financing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingResult {
    /// Equivalent monthly compounding rate, as a fraction.
    pub monthly_rate: Rate,
    /// Constant annuity payment.
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub interest_paid: Money,
    /// Effective total cost: (total_paid / principal - 1) * 100.
    pub cet_pct: Percent,
    /// Cumulative payments per month (1..=term), exactly payment * k.
    pub cumulative_payments: Vec<Money>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate a fixed-payment amortizing loan: monthly payment, totals,
/// effective total cost and the cumulative payment schedule.
pub fn simulate_financing(input: &FinancingInput) -> FinCompareResult<FinancingResult> {
    validate(input)?;

    let monthly_rate = rates::annual_to_monthly(input.annual_rate_pct)?;
    let monthly_payment = rates::annuity_payment(input.principal, monthly_rate, input.term_months)?;

    let total_paid = monthly_payment * Decimal::from(input.term_months);
    let interest_paid = total_paid - input.principal;

    let cet_pct = if input.principal > Decimal::ZERO {
        (total_paid / input.principal - Decimal::ONE) * dec!(100)
    } else {
        Decimal::ZERO
    };

    // Payments are uniform by construction, so no cap is needed here.
    let cumulative_payments = (1..=input.term_months)
        .map(|k| monthly_payment * Decimal::from(k))
        .collect();

    Ok(FinancingResult {
        monthly_rate,
        monthly_payment,
        total_paid,
        interest_paid,
        cet_pct,
        cumulative_payments,
    })
}

fn validate(input: &FinancingInput) -> FinCompareResult<()> {
    if input.term_months == 0 {
        return Err(FinCompareError::InvalidInput {
            field: "term_months".into(),
            reason: "term must be at least 1 month".into(),
        });
    }
    if input.principal < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be non-negative".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "loan rate must be non-negative".into(),
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

    fn default_input() -> FinancingInput {
        FinancingInput {
            principal: dec!(1_000_000),
            term_months: 211,
            annual_rate_pct: dec!(24),
        }
    }

    // ---------------------------------------------------------------
    // 1. 24%/yr over 211 months: rate conversion and annuity payment
    // ---------------------------------------------------------------
    #[test]
    fn test_standard_loan() {
        let result = simulate_financing(&default_input()).unwrap();

        // (1.24)^(1/12) - 1 = 0.018088...
        let rate_diff = (result.monthly_rate - dec!(0.0180875)).abs();
        assert!(rate_diff < dec!(0.0001), "monthly_rate={}", result.monthly_rate);

        // The payment must at least cover interest on the full principal.
        assert!(result.monthly_payment > result.monthly_rate * dec!(1_000_000));
        assert_eq!(
            result.total_paid,
            result.monthly_payment * dec!(211)
        );
        assert!(result.interest_paid > Decimal::ZERO);
        assert_eq!(
            result.cet_pct,
            (result.total_paid / dec!(1_000_000) - Decimal::ONE) * dec!(100)
        );
    }

    // ---------------------------------------------------------------
    // 2. Zero interest falls back to straight-line repayment
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_straight_line() {
        let input = FinancingInput {
            principal: dec!(120_000),
            term_months: 60,
            annual_rate_pct: Decimal::ZERO,
        };
        let result = simulate_financing(&input).unwrap();

        assert_eq!(result.monthly_payment, dec!(2_000));
        assert_eq!(result.total_paid, dec!(120_000));
        assert_eq!(result.interest_paid, Decimal::ZERO);
        assert_eq!(result.cet_pct, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 3. Cumulative payments grow exactly linearly
    // ---------------------------------------------------------------
    #[test]
    fn test_cumulative_is_linear() {
        let result = simulate_financing(&default_input()).unwrap();

        assert_eq!(result.cumulative_payments.len(), 211);
        for (i, cumulative) in result.cumulative_payments.iter().enumerate() {
            let expected = result.monthly_payment * Decimal::from(i as u32 + 1);
            assert_eq!(*cumulative, expected);
        }
    }

    // ---------------------------------------------------------------
    // 4. Zero principal: CET reported as 0, no division error
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_principal() {
        let input = FinancingInput {
            principal: Decimal::ZERO,
            term_months: 12,
            annual_rate_pct: dec!(10),
        };
        let result = simulate_financing(&input).unwrap();

        assert_eq!(result.monthly_payment, Decimal::ZERO);
        assert_eq!(result.total_paid, Decimal::ZERO);
        assert_eq!(result.cet_pct, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 5. Input validation
    // ---------------------------------------------------------------
    #[test]
    fn test_validation() {
        let mut input = default_input();
        input.term_months = 0;
        assert!(simulate_financing(&input).is_err());

        let mut input = default_input();
        input.principal = dec!(-100);
        assert!(simulate_financing(&input).is_err());

        let mut input = default_input();
        input.annual_rate_pct = dec!(-5);
        assert!(simulate_financing(&input).is_err());
    }

    // ---------------------------------------------------------------
    // 6. Single-month loan repays principal plus one month of interest
    // ---------------------------------------------------------------
    #[test]
    fn test_single_month_loan() {
        let input = FinancingInput {
            principal: dec!(10_000),
            term_months: 1,
            annual_rate_pct: dec!(12),
        };
        let result = simulate_financing(&input).unwrap();

        let expected = dec!(10_000) * (Decimal::ONE + result.monthly_rate);
        let diff = (result.monthly_payment - expected).abs();
        assert!(diff < dec!(0.0001), "payment={}", result.monthly_payment);
    }
}
