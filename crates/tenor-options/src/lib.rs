//! # Tenor Options
//!
//! Option formulas for the Tenor quantitative finance library.
//!
//! - **Payoffs**: terminal payoffs for vanilla and average-price calls
//!   and puts
//! - **Parity**: put-call parity identity checks under discrete dividends
//!   or a continuous yield
//! - **Profit**: payoff net of the financed premium
//! - **Binomial**: the one-period binomial model: payoffs, hedge ratio,
//!   replicating loan, and both replication and risk-neutral pricing
//!
//! Rates are decimals, times are year fractions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod binomial;
pub mod parity;
pub mod payoff;
pub mod profit;

pub use binomial::{
    hedge_ratio, payoff_binomial_call, price_from_replication, price_risk_neutral,
    replicating_loan,
};
pub use parity::{parity_holds_continuous, parity_holds_discrete, PARITY_TOLERANCE};
pub use payoff::{payoff_asian_call, payoff_call, payoff_put};
pub use profit::profit_call;
