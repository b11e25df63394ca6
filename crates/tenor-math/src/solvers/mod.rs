//! Root-finding algorithms.
//!
//! This module provides the numerical solvers behind the yield
//! calculations:
//!
//! - [`newton_raphson`]: Fast quadratic convergence inside a guard bracket
//! - [`bisection`]: Slow but guaranteed whenever the bracket straddles a root
//! - [`guarded_newton`]: The two-phase composition of the two: Newton for
//!   speed, bisection as a guaranteed-convergent safeguard
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May escape its bracket | Derivative |
//! | Bisection | Slow (linear) | Guaranteed | Bracket straddling a root |
//! | Guarded | Fast | Guaranteed* | Derivative + bracket |
//!
//! *Whenever the bracket straddles a root; an empty bracket is a hard
//! error, never a silent endpoint estimate.
//!
//! # Example: solving a present value for its flat rate
//!
//! ```rust
//! use tenor_math::solvers::{guarded_newton, SolverConfig};
//!
//! // Zero-coupon note: 100 due in 5 years, observed at 78.35
//! let f = |y: f64| 100.0 / (1.0 + y).powi(5) - 78.35;
//! let df = |y: f64| -5.0 * 100.0 / (1.0 + y).powi(6);
//!
//! let result = guarded_newton(f, df, 0.03, (0.0, 1.0), &SolverConfig::default()).unwrap();
//! assert!((f(result.root)).abs() < 1e-10);
//! ```

mod bisection;
mod guarded;
mod newton;

pub use bisection::bisection;
pub use guarded::guarded_newton;
pub use newton::newton_raphson;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// The iteration cap applies to each phase separately: a guarded solve may
/// spend up to `max_iterations` in the Newton phase and another
/// `max_iterations` in the bisection safeguard.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations per phase.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
