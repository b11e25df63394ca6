//! Yield-to-maturity solving.

use log::debug;

use tenor_core::{TenorError, TenorResult};
use tenor_math::error::MathError;
use tenor_math::solvers::{guarded_newton, SolverConfig};
use tenor_rates::discount_factor;

use crate::schedule::generate_cashflows;

/// The bracket the solver searches: nominal yields between 0 and 100%.
///
/// Newton iterates are abandoned once they leave the open interval, and
/// the bisection safeguard searches the closed one. A true yield outside
/// this range is a documented limitation, surfaced as a convergence
/// failure.
const YIELD_BRACKET: (f64, f64) = (0.0, 1.0);

/// Configuration for [`yield_to_maturity`].
///
/// # Defaults
///
/// | Parameter | Value |
/// |-----------|-------|
/// | `tolerance` | `1e-10` |
/// | `max_iterations` | `100` (per phase) |
/// | `guess` | `0.03` |
#[derive(Debug, Clone, Copy)]
pub struct YtmConfig {
    /// Convergence tolerance, applied to the price residual in the Newton
    /// phase and the interval width in the bisection phase.
    pub tolerance: f64,
    /// Maximum number of iterations per solver phase.
    pub max_iterations: u32,
    /// Starting yield for the Newton phase.
    pub guess: f64,
}

impl Default for YtmConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
            guess: 0.03,
        }
    }
}

impl YtmConfig {
    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations per phase.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the initial yield guess.
    #[must_use]
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }
}

/// Solves for the yield-to-maturity of a fixed-rate bullet bond.
///
/// Finds the single nominal annual yield `y` on compounding basis `m`
/// that, applied flat across all cashflow dates, reproduces the observed
/// `price`:
///
/// ```text
/// price = Σ cf · (1 + y/m)^(-m·t)
/// ```
///
/// The schedule is generated once and solved with
/// [`guarded_newton`]: a Newton phase driven by the analytic derivative
///
/// ```text
/// d(pv)/dy = Σ -m·t·cf·(1 + y/m)^(-m·t) / (1 + y/m)
/// ```
///
/// falling back to bisection over `[0, 1]` if an iterate escapes that
/// interval or the iteration cap is hit. Prices outside the attainable
/// band (above the undiscounted cashflow total, or below the value at a
/// 100% yield) fail with a convergence error rather than returning an
/// endpoint estimate.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::{price_fixed_rate_bond, yield_to_maturity, YtmConfig};
/// use tenor_core::term::Flat;
///
/// let price = price_fixed_rate_bond(1000.0, 0.05, 2, 10.0, &Flat::new(0.062)).unwrap();
/// let ytm = yield_to_maturity(price, 1000.0, 0.05, 2, 10.0, &YtmConfig::default()).unwrap();
/// assert!((ytm - 0.062).abs() < 1e-8);
/// ```
pub fn yield_to_maturity(
    price: f64,
    face: f64,
    coupon_rate: f64,
    m: u32,
    n_years: f64,
    config: &YtmConfig,
) -> TenorResult<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(TenorError::invalid_input(format!(
            "market price must be positive, got {price}"
        )));
    }

    let schedule = generate_cashflows(face, coupon_rate, m, n_years)?;
    let mf = f64::from(m);

    let residual = |y: f64| {
        schedule
            .iter()
            .map(|cf| cf.amount * discount_factor(y, m, cf.time))
            .sum::<f64>()
            - price
    };
    let derivative = |y: f64| {
        schedule
            .iter()
            .map(|cf| -mf * cf.time * cf.amount * discount_factor(y, m, cf.time) / (1.0 + y / mf))
            .sum::<f64>()
    };

    let solver = SolverConfig::new(config.tolerance, config.max_iterations);
    let result = guarded_newton(residual, derivative, config.guess, YIELD_BRACKET, &solver)
        .map_err(|err| {
            debug!("YTM solve failed at price {price}: {err}");
            solver_failure(err)
        })?;
    Ok(result.root)
}

/// Maps a solver failure onto the library error type.
///
/// A rootless bracket means the price is unattainable at any yield in the
/// search range; it surfaces as a convergence failure like an exhausted
/// iteration budget does.
fn solver_failure(err: MathError) -> TenorError {
    match err {
        MathError::ConvergenceFailed {
            iterations,
            residual,
        } => TenorError::convergence_failed(iterations, residual),
        MathError::InvalidBracket { fa, fb, .. } => {
            TenorError::convergence_failed(0, fa.abs().min(fb.abs()))
        }
        other => TenorError::math_error(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price_fixed_rate_bond;
    use approx::assert_relative_eq;
    use tenor_core::term::Flat;

    #[test]
    fn test_par_bond_ytm_is_coupon() {
        let config = YtmConfig::default();
        let ytm = yield_to_maturity(1000.0, 1000.0, 0.05, 2, 2.0, &config).unwrap();
        assert_relative_eq!(ytm, 0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_discount_bond_yields_above_coupon() {
        let config = YtmConfig::default();
        let ytm = yield_to_maturity(950.0, 1000.0, 0.05, 2, 5.0, &config).unwrap();
        assert!(ytm > 0.05);
    }

    #[test]
    fn test_premium_bond_yields_below_coupon() {
        let config = YtmConfig::default();
        let ytm = yield_to_maturity(1050.0, 1000.0, 0.05, 2, 5.0, &config).unwrap();
        assert!(ytm < 0.05);
    }

    #[test]
    fn test_inverts_pricing() {
        let config = YtmConfig::default();
        for y in [0.01, 0.03, 0.08, 0.15, 0.40] {
            let price = price_fixed_rate_bond(1000.0, 0.06, 2, 7.0, &Flat::new(y)).unwrap();
            let ytm = yield_to_maturity(price, 1000.0, 0.06, 2, 7.0, &config).unwrap();
            assert_relative_eq!(ytm, y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_high_yield_reached_from_low_guess() {
        // Deep discount: the default 3% guess is far from the root
        let price = price_fixed_rate_bond(1000.0, 0.08, 2, 5.0, &Flat::new(0.35)).unwrap();
        let ytm = yield_to_maturity(price, 1000.0, 0.08, 2, 5.0, &YtmConfig::default()).unwrap();
        assert_relative_eq!(ytm, 0.35, epsilon = 1e-8);
    }

    #[test]
    fn test_unattainably_high_price_fails() {
        // Above the undiscounted cashflow total: no yield in (0, 1) works
        let result = yield_to_maturity(1200.0, 1000.0, 0.05, 2, 2.0, &YtmConfig::default());
        assert!(matches!(
            result,
            Err(TenorError::ConvergenceFailed { .. })
        ));
    }

    #[test]
    fn test_unattainably_low_price_fails() {
        let result = yield_to_maturity(1.0, 1000.0, 0.05, 2, 2.0, &YtmConfig::default());
        assert!(matches!(
            result,
            Err(TenorError::ConvergenceFailed { .. })
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let result = yield_to_maturity(0.0, 1000.0, 0.05, 2, 2.0, &YtmConfig::default());
        assert!(matches!(result, Err(TenorError::InvalidInput { .. })));
    }

    #[test]
    fn test_config_builders() {
        let config = YtmConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50)
            .with_guess(0.07);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert!((config.guess - 0.07).abs() < f64::EPSILON);
    }
}
