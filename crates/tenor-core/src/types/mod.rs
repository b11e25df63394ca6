//! Domain types for the Tenor library.
//!
//! This module provides the value types shared by the pricing and risk
//! calculations:
//!
//! - [`Cashflow`]: A (time, amount) payment event
//! - [`CashflowSchedule`]: An ordered sequence of payment events

mod cashflow;

pub use cashflow::{Cashflow, CashflowSchedule};
