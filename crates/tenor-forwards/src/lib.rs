//! # Tenor Forwards
//!
//! Forward contract pricing for the Tenor quantitative finance library.
//!
//! Cost-of-carry forward prices under continuous compounding: a bare
//! underlying, one with known discrete dividends, and one with a
//! continuous payout yield.
//!
//! Rates are decimals, times are year fractions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod pricing;

pub use pricing::{forward_price, forward_price_continuous_yield, forward_price_discrete_dividend};
