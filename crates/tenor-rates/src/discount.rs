//! Finite-frequency discounting.
//!
//! Elementary time-value transforms for a nominal annual rate compounded
//! `m` times per year. These are the primitives the bond pricer and yield
//! solver are built on.

/// Finite-frequency discount factor: `(1 + rate/m)^(-m·t)`.
///
/// Valid for `m >= 1`. The base `1 + rate/m` must be positive; a rate
/// below `-m` is the caller's responsibility and propagates as NaN from
/// the power operation rather than being checked here.
///
/// # Example
///
/// ```rust
/// use tenor_rates::discount_factor;
///
/// // 5% semi-annual, one year out
/// let df = discount_factor(0.05, 2, 1.0);
/// assert!((df - 0.951814396).abs() < 1e-9);
/// ```
#[must_use]
pub fn discount_factor(rate: f64, m: u32, t: f64) -> f64 {
    let m = f64::from(m);
    (1.0 + rate / m).powf(-m * t)
}

/// Compounds a present value forward `m` times per year for `t` years.
///
/// Linear in the principal and the exact inverse of [`present_value`].
#[must_use]
pub fn future_value(pv: f64, rate: f64, m: u32, t: f64) -> f64 {
    let m = f64::from(m);
    pv * (1.0 + rate / m).powf(m * t)
}

/// Discounts a future value back to today.
///
/// Linear in the principal and the exact inverse of [`future_value`].
#[must_use]
pub fn present_value(fv: f64, rate: f64, m: u32, t: f64) -> f64 {
    fv * discount_factor(rate, m, t)
}
