//! Yield risk sensitivities.

use tenor_core::term::Flat;
use tenor_core::{TenorError, TenorResult};

use crate::pricing::price_fixed_rate_bond;

/// One basis point as a decimal rate.
pub const ONE_BASIS_POINT: f64 = 1e-4;

/// DV01: price sensitivity to a one-basis-point yield move.
///
/// Prices the bond under flat curves at `ytm + 1bp` and `ytm - 1bp` and
/// returns the symmetric central difference
///
/// ```text
/// 0.5 · (pv(ytm - bp) - pv(ytm + bp))
/// ```
///
/// signed so a normal positive-duration bond has positive DV01. This is a
/// pure finite-difference estimate, with no analytic duration or convexity
/// term, so accuracy depends on the bump staying small relative to
/// curvature.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::dv01;
///
/// let sensitivity = dv01(1000.0, 0.05, 2, 2.0, 0.05).unwrap();
/// assert!(sensitivity > 0.0);
/// ```
pub fn dv01(face: f64, coupon_rate: f64, m: u32, n_years: f64, ytm: f64) -> TenorResult<f64> {
    dv01_with_bump(face, coupon_rate, m, n_years, ytm, ONE_BASIS_POINT)
}

/// DV01 with an explicit bump size.
///
/// # Errors
///
/// The bump must be positive; a zero or negative bump is an invalid
/// input.
pub fn dv01_with_bump(
    face: f64,
    coupon_rate: f64,
    m: u32,
    n_years: f64,
    ytm: f64,
    bump: f64,
) -> TenorResult<f64> {
    if !bump.is_finite() || bump <= 0.0 {
        return Err(TenorError::invalid_input(format!(
            "bump must be positive, got {bump}"
        )));
    }

    let pv_up = price_fixed_rate_bond(face, coupon_rate, m, n_years, &Flat::new(ytm + bump))?;
    let pv_down = price_fixed_rate_bond(face, coupon_rate, m, n_years, &Flat::new(ytm - bump))?;
    Ok(0.5 * (pv_down - pv_up))
}
