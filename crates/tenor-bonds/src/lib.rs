//! # Tenor Bonds
//!
//! Fixed-rate bond valuation for the Tenor quantitative finance library.
//!
//! This crate provides the pipeline from bond terms to price and back:
//!
//! - **Scheduling**: [`generate_cashflows`] turns face value, coupon rate,
//!   frequency, and tenor into a deterministic payment schedule
//! - **Pricing**: [`price_fixed_rate_bond`] discounts a schedule under an
//!   arbitrary [`TermStructure`]
//! - **Yield solving**: [`yield_to_maturity`] inverts price to the single
//!   flat rate that reprices the bond, Newton-first with a bisection
//!   safeguard
//! - **Risk**: [`dv01`], the symmetric one-basis-point price sensitivity
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::{price_fixed_rate_bond, yield_to_maturity, YtmConfig};
//! use tenor_core::term::Flat;
//!
//! // 5% semi-annual coupon, 2 years, priced on its own coupon rate
//! let price = price_fixed_rate_bond(1000.0, 0.05, 2, 2.0, &Flat::new(0.05)).unwrap();
//! assert!((price - 1000.0).abs() < 1e-6);
//!
//! let ytm = yield_to_maturity(price, 1000.0, 0.05, 2, 2.0, &YtmConfig::default()).unwrap();
//! assert!((ytm - 0.05).abs() < 1e-8);
//! ```
//!
//! [`TermStructure`]: tenor_core::term::TermStructure

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod pricing;
pub mod risk;
pub mod schedule;
pub mod ytm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::pricing::price_fixed_rate_bond;
    pub use crate::risk::{dv01, dv01_with_bump, ONE_BASIS_POINT};
    pub use crate::schedule::generate_cashflows;
    pub use crate::ytm::{yield_to_maturity, YtmConfig};
}

pub use pricing::price_fixed_rate_bond;
pub use risk::{dv01, dv01_with_bump, ONE_BASIS_POINT};
pub use schedule::generate_cashflows;
pub use ytm::{yield_to_maturity, YtmConfig};
