//! # Tenor Rates
//!
//! Discounting, compounding, and rate-basis conversions for the Tenor
//! quantitative finance library.
//!
//! All rates are quoted as decimals (`0.05` = 5%), all times in years.
//! Day-count conversion happens upstream: pass actual year fractions into
//! the `t` arguments.
//!
//! This crate provides:
//!
//! - **Finite-frequency discounting**: [`discount_factor`],
//!   [`present_value`], [`future_value`]
//! - **Continuous compounding**: [`compound_continuous`],
//!   [`roll_forward_cont`], [`roll_back_cont`]
//! - **Rate-basis conversions**: [`effective_annual_rate`],
//!   [`equivalent_cont_rate`], [`continuous_to_nominal`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod continuous;
pub mod conversions;
pub mod discount;

pub use continuous::{compound_continuous, roll_back_cont, roll_forward_cont};
pub use conversions::{continuous_to_nominal, effective_annual_rate, equivalent_cont_rate};
pub use discount::{discount_factor, future_value, present_value};
