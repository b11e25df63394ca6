//! Dividend-discount valuation.
//!
//! The dividend-discount model family: a share is worth the present value
//! of the cash it pays out, discounted at the required rate of return.
//! Dividends are indexed from the next payment (`dividends[0]` pays one
//! period out), discounted at annual compounding.

use tenor_core::{TenorError, TenorResult};

/// Single-period DDM: next dividend plus sale price, discounted one period.
///
/// `(d1 + s1) / (1 + r)`
#[must_use]
pub fn ddm_single_period(d1: f64, s1: f64, r: f64) -> f64 {
    (d1 + s1) / (1.0 + r)
}

/// Multi-period DDM: a dividend stream plus a terminal sale price.
///
/// Discounts `dividends[t-1]` by `(1 + r)^t` and the terminal price by
/// `(1 + r)^T` where `T = dividends.len()`.
#[must_use]
pub fn ddm_multi_period(dividends: &[f64], terminal_price: f64, r: f64) -> f64 {
    let t = dividends.len() as i32;
    ddm_infinite(dividends, r) + terminal_price / (1.0 + r).powi(t)
}

/// Infinite-horizon DDM over the supplied dividend stream.
///
/// Present value of the dividends alone, with no terminal sale: the
/// infinite-horizon model evaluated over however many dividends the
/// caller projects.
#[must_use]
pub fn ddm_infinite(dividends: &[f64], r: f64) -> f64 {
    dividends
        .iter()
        .enumerate()
        .map(|(t, d)| d / (1.0 + r).powi(t as i32 + 1))
        .sum()
}

/// Required return implied by a one-period holding.
///
/// `(d1 + s1) / s0 - 1`
///
/// # Errors
///
/// The current price must be nonzero.
pub fn cost_of_equity(d1: f64, s1: f64, s0: f64) -> TenorResult<f64> {
    if s0 == 0.0 {
        return Err(TenorError::invalid_input("current price must be nonzero"));
    }
    Ok((d1 + s1) / s0 - 1.0)
}

/// Gordon growth model: a dividend growing forever at rate `g`.
///
/// `d1 / (r - g)`
///
/// # Errors
///
/// The growth rate must be below the discount rate for the perpetuity to
/// converge.
pub fn ddm_gordon_growth(d1: f64, r: f64, g: f64) -> TenorResult<f64> {
    if g >= r {
        return Err(TenorError::invalid_input(
            "growth rate must be less than discount rate for convergence",
        ));
    }
    Ok(d1 / (r - g))
}
