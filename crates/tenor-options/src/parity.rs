//! Put-call parity checks.
//!
//! European put-call parity ties a call, a put, the underlying, and a
//! riskless bond into a no-arbitrage identity. These checks report
//! whether quoted prices satisfy it to within a tolerance; they do not
//! locate which leg is off.

/// Tolerance used by convention when checking parity on quoted prices.
pub const PARITY_TOLERANCE: f64 = 1e-6;

/// Parity under discrete dividends with present value `dividend_pv`:
///
/// `put + spot  =  call + dividend_pv + strike · e^(-r·tau)`
///
/// Returns whether the two sides agree within `tol`.
#[must_use]
pub fn parity_holds_discrete(
    call: f64,
    put: f64,
    spot: f64,
    strike: f64,
    r: f64,
    tau: f64,
    dividend_pv: f64,
    tol: f64,
) -> bool {
    let lhs = put + spot;
    let rhs = call + dividend_pv + strike * (-r * tau).exp();
    (lhs - rhs).abs() < tol
}

/// Parity under a continuous dividend yield `q`:
///
/// `put + spot · e^((q-r)·tau)  =  call + strike · e^(-r·tau)`
///
/// Returns whether the two sides agree within `tol`.
#[must_use]
pub fn parity_holds_continuous(
    call: f64,
    put: f64,
    spot: f64,
    strike: f64,
    r: f64,
    q: f64,
    tau: f64,
    tol: f64,
) -> bool {
    let lhs = put + spot * ((q - r) * tau).exp();
    let rhs = call + strike * (-r * tau).exp();
    (lhs - rhs).abs() < tol
}
