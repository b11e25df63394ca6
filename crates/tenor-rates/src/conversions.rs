//! Rate-basis conversions.
//!
//! Conversions between nominal rates on a finite compounding basis, the
//! effective annual rate, and the equivalent continuous rate.

use tenor_core::{TenorError, TenorResult};

/// Effective annual rate for a nominal rate compounded `m` times a year.
///
/// `(1 + rate/m)^m - 1`
///
/// # Example
///
/// ```rust
/// use tenor_rates::effective_annual_rate;
///
/// // 12% monthly compounds to ~12.68% effective
/// let ear = effective_annual_rate(0.12, 12);
/// assert!((ear - 0.126825).abs() < 1e-6);
/// ```
#[must_use]
pub fn effective_annual_rate(rate: f64, m: u32) -> f64 {
    let m = f64::from(m);
    (1.0 + rate / m).powf(m) - 1.0
}

/// Continuously compounded rate equivalent to a nominal rate on basis `m`.
///
/// `m · ln(1 + rate/m)`
///
/// # Errors
///
/// Fails when `rate/m <= -1`: the log has no real value there.
pub fn equivalent_cont_rate(rate: f64, m: u32) -> TenorResult<f64> {
    let m = f64::from(m);
    let base = 1.0 + rate / m;
    if base <= 0.0 {
        return Err(TenorError::math_error(format!(
            "cannot take log of non-positive base {base}"
        )));
    }
    Ok(m * base.ln())
}

/// Nominal rate on basis `m` equivalent to a continuous rate.
///
/// `m · (e^(rate/m) - 1)`, the inverse of [`equivalent_cont_rate`].
#[must_use]
pub fn continuous_to_nominal(rate: f64, m: u32) -> f64 {
    let m = f64::from(m);
    m * ((rate / m).exp() - 1.0)
}
