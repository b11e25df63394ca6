//! # Tenor Core
//!
//! Core types, errors, and abstractions for the Tenor quantitative finance
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tenor:
//!
//! - **Errors**: The shared [`TenorError`] type and [`TenorResult`] alias
//! - **Types**: Cashflow domain types ([`Cashflow`], [`CashflowSchedule`])
//! - **Traits**: The [`TermStructure`] capability for discount curves
//!
//! ## Design Philosophy
//!
//! - **Plain numerics**: rates are decimals (`0.05` = 5%), times are year
//!   fractions; day-count conversion happens upstream of this library
//! - **Explicit over implicit**: invalid inputs fail at the call boundary,
//!   never by silently substituting a default
//! - **Values, not machinery**: every entity is a transient value computed
//!   per call; nothing is cached or shared
//!
//! [`Cashflow`]: types::Cashflow
//! [`CashflowSchedule`]: types::CashflowSchedule
//! [`TermStructure`]: term::TermStructure

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod term;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::term::{Flat, TermStructure};
    pub use crate::types::{Cashflow, CashflowSchedule};
}

pub use error::{TenorError, TenorResult};
pub use term::{Flat, TermStructure};
pub use types::{Cashflow, CashflowSchedule};
