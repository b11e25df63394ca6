//! Option position profit.

use crate::payoff::payoff_call;

/// Profit on a long call held to expiry.
///
/// The payoff less the premium carried forward at the continuous
/// financing rate:
///
/// `max(st - strike, 0) - premium · e^(r·tau)`
#[must_use]
pub fn profit_call(st: f64, strike: f64, premium: f64, r: f64, tau: f64) -> f64 {
    payoff_call(st, strike) - premium * (r * tau).exp()
}
