use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FinCompareError;
use crate::types::{Money, Percent, Rate};
use crate::FinCompareResult;

/// Convert an annual nominal rate (as a percentage, 24.0 = 24%) into the
/// equivalent monthly compounding rate (as a fraction):
/// `(1 + annual/100)^(1/12) - 1`.
///
/// Zero yields zero. Negative rates above -100% are accepted and produce
/// mathematically valid results; at or below -100% the twelfth root is
/// undefined and the input is rejected.
pub fn annual_to_monthly(annual_pct: Percent) -> FinCompareResult<Rate> {
    let growth = Decimal::ONE + annual_pct / dec!(100);
    if growth <= Decimal::ZERO {
        return Err(FinCompareError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "annual rate must be greater than -100%".into(),
        });
    }
    if annual_pct.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let twelfth = Decimal::ONE / dec!(12);
    Ok(growth.powd(twelfth) - Decimal::ONE)
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, periods: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..periods {
        result *= factor;
    }
    result
}

/// Level payment that amortizes `principal` over `term_months` at
/// `monthly_rate`: `P = principal * r / (1 - (1+r)^-n)`.
///
/// An exact-zero rate degenerates to straight-line repayment `principal / n`.
pub fn annuity_payment(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
) -> FinCompareResult<Money> {
    if term_months == 0 {
        return Err(FinCompareError::InvalidInput {
            field: "term_months".into(),
            reason: "term must be at least 1 month".into(),
        });
    }

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let factor = compound(monthly_rate, term_months);
    if factor.is_zero() {
        return Err(FinCompareError::DivisionByZero {
            context: "annuity compounding factor".into(),
        });
    }

    let annuity_factor = Decimal::ONE - Decimal::ONE / factor;
    if annuity_factor.is_zero() {
        return Err(FinCompareError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * monthly_rate / annuity_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ---------------------------------------------------------------
    // 1. Zero annual rate converts to zero monthly rate
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_annual_rate_is_zero_monthly() {
        assert_eq!(annual_to_monthly(dec!(0)).unwrap(), Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 2. 24% per year compounds to ~1.8088% per month
    // ---------------------------------------------------------------
    #[test]
    fn test_24_pct_annual() {
        let monthly = annual_to_monthly(dec!(24)).unwrap();
        // (1.24)^(1/12) - 1 = 0.0180875...
        let diff = (monthly - dec!(0.0180875)).abs();
        assert!(diff < dec!(0.0001), "monthly={}", monthly);
    }

    // ---------------------------------------------------------------
    // 3. Monthly rate compounded 12 times recovers the annual growth
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip_through_compound() {
        let monthly = annual_to_monthly(dec!(10)).unwrap();
        let annual_growth = compound(monthly, 12);
        let diff = (annual_growth - dec!(1.10)).abs();
        assert!(diff < dec!(0.0001), "annual_growth={}", annual_growth);
    }

    // ---------------------------------------------------------------
    // 4. Negative rates above -100% are valid, at -100% rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_negative_rates() {
        let monthly = annual_to_monthly(dec!(-50)).unwrap();
        assert!(monthly < Decimal::ZERO);

        assert!(annual_to_monthly(dec!(-100)).is_err());
        assert!(annual_to_monthly(dec!(-150)).is_err());
    }

    // ---------------------------------------------------------------
    // 5. Annuity payment: zero rate falls back to straight-line
    // ---------------------------------------------------------------
    #[test]
    fn test_annuity_zero_rate_straight_line() {
        let p = annuity_payment(dec!(120_000), Decimal::ZERO, 12).unwrap();
        assert_eq!(p, dec!(10_000));
    }

    // ---------------------------------------------------------------
    // 6. Annuity payment: known fixture (1% monthly over 12 months)
    // ---------------------------------------------------------------
    #[test]
    fn test_annuity_known_value() {
        // 10_000 at 1%/month over 12 months -> 888.49
        let p = annuity_payment(dec!(10_000), dec!(0.01), 12).unwrap();
        let diff = (p - dec!(888.49)).abs();
        assert!(diff < dec!(0.01), "payment={}", p);
    }

    // ---------------------------------------------------------------
    // 7. Zero-month term is rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_annuity_zero_term_rejected() {
        assert!(annuity_payment(dec!(10_000), dec!(0.01), 0).is_err());
    }
}
