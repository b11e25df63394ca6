//! Cashflow types for bond analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single payment event.
///
/// Times are year fractions measured from the valuation date; amounts are
/// in currency units. Day-count conversion happens upstream: callers pass
/// actual year fractions into `time`.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Cashflow;
///
/// let cf = Cashflow::new(0.5, 25.0);
/// assert_eq!(cf.time, 0.5);
/// assert_eq!(cf.amount, 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cashflow {
    /// Payment time in years since the valuation date.
    pub time: f64,
    /// Payment amount in currency units.
    pub amount: f64,
}

impl Cashflow {
    /// Creates a new cashflow.
    #[must_use]
    pub fn new(time: f64, amount: f64) -> Self {
        Self { time, amount }
    }
}

impl fmt::Display for Cashflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}y: {:.4}", self.time, self.amount)
    }
}

/// An ordered schedule of cashflows.
///
/// Schedules produced by the bond scheduler hold strictly increasing times
/// with exactly one event per coupon period; the final event carries the
/// principal redemption on top of the regular coupon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashflowSchedule {
    /// Ordered list of cashflows.
    cashflows: Vec<Cashflow>,
}

impl CashflowSchedule {
    /// Creates a new empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cashflows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cashflows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cashflow to the schedule.
    pub fn push(&mut self, cf: Cashflow) {
        self.cashflows.push(cf);
    }

    /// Returns the cashflows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Cashflow] {
        &self.cashflows
    }

    /// Returns the number of cashflows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cashflows.len()
    }

    /// Returns true if there are no cashflows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cashflows.is_empty()
    }

    /// Returns an iterator over the cashflows.
    pub fn iter(&self) -> impl Iterator<Item = &Cashflow> {
        self.cashflows.iter()
    }

    /// Returns the last cashflow, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Cashflow> {
        self.cashflows.last()
    }

    /// Returns the sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cashflows.iter().map(|cf| cf.amount).sum()
    }
}

impl IntoIterator for CashflowSchedule {
    type Item = Cashflow;
    type IntoIter = std::vec::IntoIter<Cashflow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cashflows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashflowSchedule {
    type Item = &'a Cashflow;
    type IntoIter = std::slice::Iter<'a, Cashflow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cashflows.iter()
    }
}

impl FromIterator<Cashflow> for CashflowSchedule {
    fn from_iter<I: IntoIterator<Item = Cashflow>>(iter: I) -> Self {
        Self {
            cashflows: iter.into_iter().collect(),
        }
    }
}
