//! Future value calculation for a lump sum with monthly contributions
//!
//! Annual compounding; contributions are modeled as a monthly annuity whose
//! stream compounds to `c * 12 * ((1+r)^t - 1) / r` by time `t`.

use crate::error::ProjectionError;

/// Compute the value of an investment after `years` at annual rate `rate`,
/// given a starting `principal` and a `monthly_contribution`.
///
/// The contribution annuity formula divides by the rate, so the zero-rate
/// case takes an explicit branch: with no compounding the contributions are
/// simply `c * 12 * t`.
///
/// # Arguments
/// * `principal` - Initial lump sum (assumed non-negative; enforced upstream)
/// * `monthly_contribution` - Amount added each of 12 periods per year
/// * `rate` - Annual rate as a decimal (0.05 for 5%); may be zero
/// * `years` - Elapsed time in years
///
/// # Errors
/// Returns `InvalidRate` when `1 + rate <= 0`, where the growth factor
/// `(1 + rate)^t` is undefined.
pub fn future_value(
    principal: f64,
    monthly_contribution: f64,
    rate: f64,
    years: f64,
) -> Result<f64, ProjectionError> {
    if 1.0 + rate <= 0.0 {
        return Err(ProjectionError::InvalidRate { rate });
    }

    let growth = (1.0 + rate).powf(years);
    let lump_sum = principal * growth;

    let contributions = if rate == 0.0 {
        monthly_contribution * 12.0 * years
    } else {
        monthly_contribution * 12.0 * (growth - 1.0) / rate
    };

    Ok(lump_sum + contributions)
}

/// Interest-free comparison baseline: the principal plus every contribution,
/// with no growth applied. Independent of any rate.
pub fn baseline_value(principal: f64, monthly_contribution: f64, years: f64) -> f64 {
    principal + monthly_contribution * 12.0 * years
}

/// Round a monetary amount to two decimal places.
///
/// Applied only where values are handed to the presentation layer; internal
/// computation stays at full precision.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
