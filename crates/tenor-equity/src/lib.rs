//! # Tenor Equity
//!
//! Equity formulas for the Tenor quantitative finance library.
//!
//! A flat surface of closed-form calculations:
//!
//! - **Returns**: [`return_simple`]
//! - **Basics**: [`market_cap`], [`ownership_fraction`]
//! - **Valuation**: the dividend-discount family ([`ddm_single_period`],
//!   [`ddm_multi_period`], [`ddm_infinite`], [`ddm_gordon_growth`]) and
//!   [`cost_of_equity`]
//! - **Indices**: price-weighted, cap-weighted, and value-line index
//!   construction
//! - **Profit**: financing-adjusted position profit
//!
//! Rates are decimals, times are year fractions. Invalid arguments fail
//! at the call boundary with a [`TenorError`]; pure formulas with no
//! failure mode return plain `f64`.
//!
//! [`TenorError`]: tenor_core::TenorError

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod basic;
pub mod index;
pub mod profit;
pub mod returns;
pub mod valuation;

pub use basic::{market_cap, ownership_fraction};
pub use index::{
    index_cap_weighted, index_price_weighted, index_value_line_arithmetic,
    index_value_line_geometric,
};
pub use profit::{profit_simple, profit_with_costs};
pub use returns::return_simple;
pub use valuation::{
    cost_of_equity, ddm_gordon_growth, ddm_infinite, ddm_multi_period, ddm_single_period,
};
