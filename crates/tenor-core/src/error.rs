//! Error types for the Tenor library.
//!
//! This module defines the error type shared across the Tenor crates,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Tenor operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The main error type for Tenor operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TenorError {
    /// An argument failed validation at the call boundary.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid argument.
        reason: String,
    },

    /// Bond terms are inconsistent or unusable.
    #[error("Invalid bond specification: {reason}")]
    InvalidBondSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// A tenor too short to produce a single payment period.
    #[error("Invalid tenor: {n_years}y at frequency {frequency} rounds to an empty schedule")]
    InvalidTenor {
        /// Bond life in years.
        n_years: f64,
        /// Compounding/coupon frequency per year.
        frequency: u32,
    },

    /// Numerical solver failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Mathematical error (log of a non-positive base, etc.).
    #[error("Mathematical error: {reason}")]
    MathError {
        /// Description of the error.
        reason: String,
    },
}

impl TenorError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid bond specification error.
    #[must_use]
    pub fn invalid_bond_spec(reason: impl Into<String>) -> Self {
        Self::InvalidBondSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(n_years: f64, frequency: u32) -> Self {
        Self::InvalidTenor { n_years, frequency }
    }

    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a math error.
    #[must_use]
    pub fn math_error(reason: impl Into<String>) -> Self {
        Self::MathError {
            reason: reason.into(),
        }
    }
}
