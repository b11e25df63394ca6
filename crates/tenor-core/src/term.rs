//! The term-structure capability.
//!
//! Pricing discounts each cashflow at the zero rate the curve quotes for
//! that cashflow's time. The curve is an opaque, read-only oracle owned by
//! the caller: [`TermStructure`] is the single-method contract it must
//! satisfy, and any `Fn(f64) -> f64` closure satisfies it automatically.

use serde::{Deserialize, Serialize};

/// A mapping from time-to-cashflow to an annualized zero rate.
///
/// The quoted rate must be on the same compounding basis as the bond being
/// priced. Implementations must be side-effect-free: the pricer may invoke
/// the curve once per cashflow on every pricing call, with no caching in
/// between.
pub trait TermStructure {
    /// Returns the annualized zero rate for a cashflow `t` years out.
    fn zero_rate(&self, t: f64) -> f64;
}

impl<F> TermStructure for F
where
    F: Fn(f64) -> f64,
{
    fn zero_rate(&self, t: f64) -> f64 {
        self(t)
    }
}

/// A flat curve quoting the same rate at every maturity.
///
/// This is the curve the yield solver and DV01 price against: a single
/// scalar rate applied across all cashflow dates.
///
/// # Example
///
/// ```rust
/// use tenor_core::term::{Flat, TermStructure};
///
/// let curve = Flat::new(0.05);
/// assert_eq!(curve.zero_rate(0.5), 0.05);
/// assert_eq!(curve.zero_rate(30.0), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flat {
    /// Flat zero rate (decimal, not a percent).
    pub rate: f64,
}

impl Flat {
    /// Creates a flat curve at the given rate.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl TermStructure for Flat {
    fn zero_rate(&self, _t: f64) -> f64 {
        self.rate
    }
}
