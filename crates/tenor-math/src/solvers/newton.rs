//! Newton-Raphson root-finding inside a guard bracket.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding, guarded by an open interval.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root, but it can
/// overshoot or diverge when started far from it. The iteration is
/// therefore abandoned as soon as an update lands outside the open
/// interval `(lo, hi)`: continuing from a point the caller has declared
/// nonsensical would only compound the divergence. The abandonment is
/// reported as an ordinary convergence failure; callers that need a
/// guaranteed answer compose this with a bracketing safeguard (see
/// [`guarded_newton`](crate::solvers::guarded_newton)).
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `bounds` - Open interval `(lo, hi)` an iterate must stay inside
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the iteration
/// escaped its bounds, hit a flat derivative, or ran out of iterations.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, (0.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
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
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        // Check for convergence
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        // Check for zero derivative
        if dfx.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        // Newton step
        x -= fx / dfx;

        // Escaped the guard interval: abandon rather than iterate on a
        // nonsensical point. NaN fails this test too and lands here.
        if !(x > lo && x < hi) {
            return Err(MathError::convergence_failed(iteration + 1, fx.abs()));
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
