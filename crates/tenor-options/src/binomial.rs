//! One-period binomial option pricing.
//!
//! The underlying moves from `s0` to one of two states, `s_up` or
//! `s_down`, over one period. A call is priced either from the
//! replicating portfolio (hedge ratio plus loan, discrete financing) or
//! directly under the risk-neutral measure (continuous discounting).

use tenor_core::{TenorError, TenorResult};

use crate::payoff::payoff_call;

/// Call payoffs in the up and down states.
#[must_use]
pub fn payoff_binomial_call(s_up: f64, s_down: f64, strike: f64) -> (f64, f64) {
    (payoff_call(s_up, strike), payoff_call(s_down, strike))
}

/// Hedge ratio (delta) of the replicating portfolio.
///
/// `(c_up - c_down) / (s_up - s_down)`
///
/// # Errors
///
/// The two terminal stock states must differ.
pub fn hedge_ratio(c_up: f64, c_down: f64, s_up: f64, s_down: f64) -> TenorResult<f64> {
    if s_up == s_down {
        return Err(TenorError::invalid_input(
            "up and down stock states must differ",
        ));
    }
    Ok((c_up - c_down) / (s_up - s_down))
}

/// Riskless borrowing in the replicating portfolio.
///
/// The loan that, together with `delta` shares, reproduces the option in
/// both states: `(delta · s_down - c_down) / (1 + r)`.
///
/// # Errors
///
/// The two terminal stock states must differ.
pub fn replicating_loan(c_up: f64, c_down: f64, s_up: f64, s_down: f64, r: f64) -> TenorResult<f64> {
    let delta = hedge_ratio(c_up, c_down, s_up, s_down)?;
    Ok((delta * s_down - c_down) / (1.0 + r))
}

/// Option value from an explicit replicating portfolio.
///
/// `delta · s0 - (1 + r)^tau · loan`
#[must_use]
pub fn price_from_replication(s0: f64, delta: f64, loan: f64, r: f64, tau: f64) -> f64 {
    delta * s0 - (1.0 + r).powf(tau) * loan
}

/// Option value under the one-period risk-neutral measure.
///
/// With `u = s_up/s0`, `d = s_down/s0` and
/// `p* = (e^(r·tau) - d) / (u - d)`, the value is the discounted
/// risk-neutral expectation `e^(-r·tau) · (p*·c_up + (1-p*)·c_down)`.
///
/// # Errors
///
/// The spot must be positive and the lattice non-degenerate
/// (`s_up != s_down`).
pub fn price_risk_neutral(
    s0: f64,
    s_up: f64,
    s_down: f64,
    c_up: f64,
    c_down: f64,
    r: f64,
    tau: f64,
) -> TenorResult<f64> {
    if s0 <= 0.0 {
        return Err(TenorError::invalid_input(format!(
            "spot must be positive, got {s0}"
        )));
    }
    let u = s_up / s0;
    let d = s_down / s0;
    if u == d {
        return Err(TenorError::invalid_input(
            "up and down stock states must differ",
        ));
    }

    let p_star = ((r * tau).exp() - d) / (u - d);
    let expected_payoff = p_star * c_up + (1.0 - p_star) * c_down;
    Ok((-r * tau).exp() * expected_payoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payoffs() {
        let (c_up, c_down) = payoff_binomial_call(120.0, 90.0, 100.0);
        assert_relative_eq!(c_up, 20.0);
        assert_relative_eq!(c_down, 0.0);
    }

    #[test]
    fn test_hedge_ratio() {
        // (20 - 0) / (120 - 90)
        assert_relative_eq!(
            hedge_ratio(20.0, 0.0, 120.0, 90.0).unwrap(),
            2.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_lattice_rejected() {
        assert!(hedge_ratio(5.0, 5.0, 100.0, 100.0).is_err());
        assert!(price_risk_neutral(100.0, 110.0, 110.0, 10.0, 10.0, 0.05, 1.0).is_err());
    }

    #[test]
    fn test_price_from_replication() {
        let price = price_from_replication(100.0, 2.0 / 3.0, 57.0, 0.05, 1.0);
        assert_relative_eq!(price, 2.0 / 3.0 * 100.0 - 1.05 * 57.0, epsilon = 1e-12);
    }

    #[test]
    fn test_risk_neutral_price() {
        // u = 1.2, d = 0.9, e^0.05 ≈ 1.05127: p* ≈ 0.50424
        let price =
            price_risk_neutral(100.0, 120.0, 90.0, 20.0, 0.0, 0.05, 1.0).unwrap();
        let p_star = (0.05_f64.exp() - 0.9) / 0.3;
        let expected = (-0.05_f64).exp() * p_star * 20.0;
        assert_relative_eq!(price, expected, epsilon = 1e-9);
        assert!(price > 0.0 && price < 20.0);
    }

    #[test]
    fn test_replication_reproduces_both_states() {
        // The hedged portfolio pays the option in each terminal state
        let (s_up, s_down, strike, r) = (120.0, 90.0, 100.0, 0.05);
        let (c_up, c_down) = payoff_binomial_call(s_up, s_down, strike);
        let delta = hedge_ratio(c_up, c_down, s_up, s_down).unwrap();
        let loan = replicating_loan(c_up, c_down, s_up, s_down, r).unwrap();

        assert_relative_eq!(delta * s_up - loan * (1.0 + r), c_up, epsilon = 1e-9);
        assert_relative_eq!(delta * s_down - loan * (1.0 + r), c_down, epsilon = 1e-9);
    }

    #[test]
    fn test_non_positive_spot_rejected() {
        assert!(price_risk_neutral(0.0, 120.0, 90.0, 20.0, 0.0, 0.05, 1.0).is_err());
    }
}
