//! Maturity projections for fixed deposits, recurring deposits, and SIPs.
//!
//! All functions are pure. Amounts are left unrounded; callers round for display.
//! Out-of-range but finite input (negative amounts or rates) is computed as-is.

use serde::Serialize;
use tracing::trace;

use finwise_domain::{DurationMonths, MonetaryAmount, ProductKind, RatePercent};

use crate::error::{ensure_finite, CoreError};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Result of a fixed deposit projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FdMaturity {
    pub maturity_amount: MonetaryAmount,
    pub interest_earned: MonetaryAmount,
}

/// Result of a recurring deposit projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RdMaturity {
    pub maturity_amount: MonetaryAmount,
    pub interest_earned: MonetaryAmount,
    pub total_deposited: MonetaryAmount,
}

/// Result of a SIP projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipProjection {
    pub future_value: MonetaryAmount,
    pub total_invested: MonetaryAmount,
    pub returns: MonetaryAmount,
    /// Whole-percent gain over the invested amount.
    pub returns_percentage: f64,
}

/// Fixed deposit with annual compounding, scaled fractionally by elapsed years.
///
/// `maturity = principal * (1 + rate/100) ^ (months/12)`
pub fn compute_fd_maturity(
    principal: MonetaryAmount,
    annual_rate_percent: RatePercent,
    months: DurationMonths,
) -> Result<FdMaturity, CoreError> {
    let principal = ensure_finite("principal", principal)?;
    let rate = ensure_finite("annual rate", annual_rate_percent)?;

    let years = f64::from(months) / MONTHS_PER_YEAR;
    let maturity_amount = principal * (1.0 + rate / 100.0).powf(years);
    trace!(principal, rate, months, maturity_amount, "fd maturity computed");

    Ok(FdMaturity {
        maturity_amount,
        interest_earned: maturity_amount - principal,
    })
}

/// Recurring deposit with monthly compounding; deposits are made at the start of each month.
pub fn compute_rd_maturity(
    monthly_amount: MonetaryAmount,
    annual_rate_percent: RatePercent,
    months: DurationMonths,
) -> Result<RdMaturity, CoreError> {
    let monthly_amount = ensure_finite("monthly amount", monthly_amount)?;
    let rate = ensure_finite("annual rate", annual_rate_percent)?;

    let total_deposited = monthly_amount * f64::from(months);
    let maturity_amount = annuity_due(monthly_amount, rate, months);
    trace!(monthly_amount, rate, months, maturity_amount, "rd maturity computed");

    Ok(RdMaturity {
        maturity_amount,
        interest_earned: maturity_amount - total_deposited,
        total_deposited,
    })
}

/// SIP future value using the recurring deposit annuity over `years * 12` months.
pub fn compute_sip_future_value(
    monthly_amount: MonetaryAmount,
    annual_return_percent: RatePercent,
    years: u32,
) -> Result<SipProjection, CoreError> {
    let monthly_amount = ensure_finite("monthly amount", monthly_amount)?;
    let rate = ensure_finite("expected return", annual_return_percent)?;

    let months = years.saturating_mul(12);
    let total_invested = monthly_amount * f64::from(months);
    let future_value = annuity_due(monthly_amount, rate, months);
    let returns = future_value - total_invested;
    let returns_percentage = if total_invested.abs() < f64::EPSILON {
        0.0
    } else {
        (returns / total_invested * 100.0).round()
    };
    trace!(monthly_amount, rate, years, future_value, "sip projection computed");

    Ok(SipProjection {
        future_value,
        total_invested,
        returns,
        returns_percentage,
    })
}

/// `A * ((1+i)^n - 1) / i * (1+i)` with `i = rate/12/100`; a zero rate degenerates to `A * n`.
fn annuity_due(amount: f64, annual_rate_percent: f64, months: DurationMonths) -> f64 {
    let periods = f64::from(months);
    let monthly_rate = annual_rate_percent / MONTHS_PER_YEAR / 100.0;
    if monthly_rate.abs() < f64::EPSILON {
        return amount * periods;
    }
    let growth = (1.0 + monthly_rate).powf(periods);
    amount * (growth - 1.0) / monthly_rate * (1.0 + monthly_rate)
}

/// Output of [`MaturityCalculator::compute`], tagged by product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "product", rename_all = "lowercase")]
pub enum MaturityQuote {
    Fd(FdMaturity),
    Rd(RdMaturity),
    Sip(SipProjection),
}

impl MaturityQuote {
    pub fn kind(&self) -> ProductKind {
        match self {
            MaturityQuote::Fd(_) => ProductKind::Fd,
            MaturityQuote::Rd(_) => ProductKind::Rd,
            MaturityQuote::Sip(_) => ProductKind::Sip,
        }
    }

    /// Value paid out at the end of the term.
    pub fn maturity_value(&self) -> MonetaryAmount {
        match self {
            MaturityQuote::Fd(fd) => fd.maturity_amount,
            MaturityQuote::Rd(rd) => rd.maturity_amount,
            MaturityQuote::Sip(sip) => sip.future_value,
        }
    }

    /// Interest or returns on top of what was put in.
    pub fn gain(&self) -> MonetaryAmount {
        match self {
            MaturityQuote::Fd(fd) => fd.interest_earned,
            MaturityQuote::Rd(rd) => rd.interest_earned,
            MaturityQuote::Sip(sip) => sip.returns,
        }
    }
}

/// Selects a calculator by product tag.
pub struct MaturityCalculator;

impl MaturityCalculator {
    /// `duration` is in months for FD/RD and in years for SIP.
    pub fn compute(
        kind: ProductKind,
        amount: MonetaryAmount,
        rate: RatePercent,
        duration: u32,
    ) -> Result<MaturityQuote, CoreError> {
        match kind {
            ProductKind::Fd => compute_fd_maturity(amount, rate, duration).map(MaturityQuote::Fd),
            ProductKind::Rd => compute_rd_maturity(amount, rate, duration).map(MaturityQuote::Rd),
            ProductKind::Sip => {
                compute_sip_future_value(amount, rate, duration).map(MaturityQuote::Sip)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn fd_one_year_matches_simple_rate() {
        let result = compute_fd_maturity(10_000.0, 6.5, 12).unwrap();
        assert!((result.maturity_amount - 10_650.0).abs() < TOLERANCE);
        assert!((result.interest_earned - 650.0).abs() < TOLERANCE);
    }

    #[test]
    fn fd_zero_months_returns_principal() {
        let result = compute_fd_maturity(5_000.0, 7.0, 0).unwrap();
        assert_eq!(result.maturity_amount, 5_000.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn fd_negative_rate_is_computed_not_rejected() {
        let result = compute_fd_maturity(1_000.0, -10.0, 12).unwrap();
        assert!((result.maturity_amount - 900.0).abs() < TOLERANCE);
        assert!(result.interest_earned < 0.0);
    }

    #[test]
    fn fd_eighteen_months_scales_fractionally() {
        let result = compute_fd_maturity(10_000.0, 8.0, 18).unwrap();
        let expected = 10_000.0 * 1.08_f64.powf(1.5);
        assert!((result.maturity_amount - expected).abs() < TOLERANCE);
    }

    #[test]
    fn fd_grows_only_with_positive_rate() {
        for months in [1, 6, 12, 37, 120] {
            let flat = compute_fd_maturity(25_000.0, 0.0, months).unwrap();
            assert_eq!(flat.maturity_amount, 25_000.0);
            assert_eq!(flat.interest_earned, 0.0);

            let growing = compute_fd_maturity(25_000.0, 7.25, months).unwrap();
            assert!(growing.maturity_amount > 25_000.0, "{months} months");
        }
    }

    #[test]
    fn rd_positive_rate_beats_deposits_for_every_term() {
        let empty = compute_rd_maturity(1_500.0, 6.5, 0).unwrap();
        assert_eq!(empty.maturity_amount, empty.total_deposited);
        assert_eq!(empty.interest_earned, 0.0);

        for months in 1..=120 {
            let result = compute_rd_maturity(1_500.0, 6.5, months).unwrap();
            assert_eq!(result.total_deposited, 1_500.0 * f64::from(months));
            assert!(
                result.maturity_amount > result.total_deposited,
                "{months} months"
            );
        }
    }

    #[test]
    fn repeated_calls_give_identical_results() {
        assert_eq!(
            compute_fd_maturity(10_000.0, 6.5, 18).unwrap(),
            compute_fd_maturity(10_000.0, 6.5, 18).unwrap()
        );
        assert_eq!(
            compute_rd_maturity(1_000.0, 6.5, 24).unwrap(),
            compute_rd_maturity(1_000.0, 6.5, 24).unwrap()
        );
        assert_eq!(
            compute_sip_future_value(2_000.0, 12.0, 10).unwrap(),
            compute_sip_future_value(2_000.0, 12.0, 10).unwrap()
        );
        assert_eq!(
            MaturityCalculator::compute(ProductKind::Sip, 500.0, 9.0, 3).unwrap(),
            MaturityCalculator::compute(ProductKind::Sip, 500.0, 9.0, 3).unwrap()
        );
    }

    #[test]
    fn rd_twelve_months_at_six_percent() {
        let result = compute_rd_maturity(1_000.0, 6.0, 12).unwrap();
        assert_eq!(result.total_deposited, 12_000.0);
        assert_eq!(result.maturity_amount.round(), 12_397.0);
        assert_eq!(result.interest_earned.round(), 397.0);
    }

    #[test]
    fn rd_zero_rate_returns_deposits() {
        let result = compute_rd_maturity(1_000.0, 0.0, 12).unwrap();
        assert_eq!(result.maturity_amount, 12_000.0);
        assert_eq!(result.interest_earned, 0.0);
        assert!(result.maturity_amount.is_finite());
    }

    #[test]
    fn rd_zero_months_is_zero() {
        let result = compute_rd_maturity(1_000.0, 6.0, 0).unwrap();
        assert_eq!(result.maturity_amount, 0.0);
        assert_eq!(result.total_deposited, 0.0);
    }

    #[test]
    fn sip_ten_years_default_inputs() {
        let result = compute_sip_future_value(2_000.0, 12.0, 10).unwrap();
        assert_eq!(result.total_invested, 240_000.0);
        let expected = 2_000.0 * (1.01_f64.powf(120.0) - 1.0) / 0.01 * 1.01;
        assert!((result.future_value - expected).abs() < TOLERANCE);
        assert!((result.returns - (expected - 240_000.0)).abs() < TOLERANCE);
        assert_eq!(
            result.returns_percentage,
            ((expected - 240_000.0) / 240_000.0 * 100.0).round()
        );
    }

    #[test]
    fn sip_zero_rate_and_zero_years_are_defined() {
        let flat = compute_sip_future_value(500.0, 0.0, 2).unwrap();
        assert_eq!(flat.future_value, 12_000.0);
        assert_eq!(flat.returns_percentage, 0.0);

        let empty = compute_sip_future_value(500.0, 12.0, 0).unwrap();
        assert_eq!(empty.total_invested, 0.0);
        assert_eq!(empty.returns_percentage, 0.0);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let err = compute_fd_maturity(f64::NAN, 6.5, 12).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert!(compute_rd_maturity(100.0, f64::INFINITY, 12).is_err());
        assert!(compute_sip_future_value(f64::NEG_INFINITY, 12.0, 1).is_err());
    }

    #[test]
    fn calculator_dispatches_on_product_kind() {
        let quote = MaturityCalculator::compute(ProductKind::Rd, 1_000.0, 6.0, 12).unwrap();
        assert_eq!(quote.kind(), ProductKind::Rd);
        assert_eq!(quote.maturity_value().round(), 12_397.0);

        let quote = MaturityCalculator::compute(ProductKind::Fd, 10_000.0, 6.5, 12).unwrap();
        assert!((quote.gain() - 650.0).abs() < TOLERANCE);
    }
}
