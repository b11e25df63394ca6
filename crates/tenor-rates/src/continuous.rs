//! Continuous compounding.
//!
//! Transforms under a continuously compounded rate: `e^(r·t)` growth and
//! its inverse.

/// Compounds a principal continuously: `principal · e^(rate·t)`.
#[must_use]
pub fn compound_continuous(principal: f64, rate: f64, t: f64) -> f64 {
    principal * (rate * t).exp()
}

/// Rolls a price forward `tau` years at a continuous rate.
#[must_use]
pub fn roll_forward_cont(value: f64, rate: f64, tau: f64) -> f64 {
    value * (rate * tau).exp()
}

/// Rolls a price back `tau` years at a continuous rate.
#[must_use]
pub fn roll_back_cont(value: f64, rate: f64, tau: f64) -> f64 {
    value * (-rate * tau).exp()
}
