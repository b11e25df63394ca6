//! Terminal option payoffs.

/// Call payoff at expiry: `max(st - strike, 0)`.
#[must_use]
pub fn payoff_call(st: f64, strike: f64) -> f64 {
    (st - strike).max(0.0)
}

/// Put payoff at expiry: `max(strike - st, 0)`.
#[must_use]
pub fn payoff_put(st: f64, strike: f64) -> f64 {
    (strike - st).max(0.0)
}

/// Average-price (Asian) call payoff: `max(average_price - strike, 0)`.
#[must_use]
pub fn payoff_asian_call(average_price: f64, strike: f64) -> f64 {
    (average_price - strike).max(0.0)
}
