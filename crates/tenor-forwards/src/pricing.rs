//! Cost-of-carry forward prices.

/// Forward price of an underlying with no payouts.
///
/// `spot · e^(r·tau)`
///
/// # Example
///
/// ```rust
/// use tenor_forwards::forward_price;
///
/// let fwd = forward_price(100.0, 0.05, 1.0);
/// assert!((fwd - 100.0 * 0.05_f64.exp()).abs() < 1e-9);
/// ```
#[must_use]
pub fn forward_price(spot: f64, r: f64, tau: f64) -> f64 {
    spot * (r * tau).exp()
}

/// Forward price with known discrete dividends of present value
/// `dividend_pv`.
///
/// `(spot - dividend_pv) · e^(r·tau)`
#[must_use]
pub fn forward_price_discrete_dividend(spot: f64, dividend_pv: f64, r: f64, tau: f64) -> f64 {
    (spot - dividend_pv) * (r * tau).exp()
}

/// Forward price with a continuous payout yield `q`.
///
/// `spot · e^((r-q)·tau)`
#[must_use]
pub fn forward_price_continuous_yield(spot: f64, r: f64, q: f64, tau: f64) -> f64 {
    spot * ((r - q) * tau).exp()
}
