//! Guarded two-phase root-finding.
//!
//! Combines Newton-Raphson with a bisection safeguard for guaranteed
//! convergence on a bracketed root.

use log::debug;

use crate::error::MathResult;
use crate::solvers::{bisection, newton_raphson, SolverConfig, SolverResult};

/// Two-phase Newton-then-bisection root-finding.
///
/// # Strategy
///
/// 1. **Newton phase**: iterate from `initial_guess`, abandoning the
///    phase if an update leaves the open interval `(lo, hi)` or the
///    iteration cap is reached.
/// 2. **Bisection phase**: on any Newton failure, bisect `[lo, hi]` until
///    the interval collapses below tolerance.
///
/// Newton converges quadratically near the root but can overshoot or
/// diverge when the residual surface is steep or the guess is poor;
/// bisection is linear but monotone-safe, and converges whenever the
/// bracket straddles a root. The composition spends bisection's extra
/// iterations only when Newton has already failed.
///
/// The transition is transparent: the bisection phase is entered the same
/// way whether Newton escaped its bounds or merely ran out of iterations,
/// and the result carries no record of which phase produced it. A bracket
/// that straddles no root fails with [`MathError::InvalidBracket`] rather
/// than collapsing onto an endpoint that solves nothing.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the Newton phase
/// * `bounds` - Interval `(lo, hi)`: Newton guard and bisection bracket
/// * `config` - Solver configuration (cap applies to each phase)
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{guarded_newton, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = guarded_newton(f, df, 1.5, (1.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-10);
/// ```
///
/// [`MathError::InvalidBracket`]: crate::error::MathError::InvalidBracket
pub fn guarded_newton<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lo, hi) = bounds;

    match newton_raphson(&f, &df, initial_guess, bounds, config) {
        Ok(result) => Ok(result),
        Err(err) => {
            debug!(
                "Newton phase ended without converging ({err}); bisecting [{lo}, {hi}]"
            );
            bisection(&f, lo, hi, config)
        }
    }
}
