//! Financing-adjusted position profit.
//!
//! Profit on a position funded at a continuously compounded rate: what
//! the position sells for versus what the purchase cost grew to.

/// Profit on a position bought at `s0` and sold at `st` after `tau`
/// years, funded at a continuous rate.
///
/// `st - s0 · e^(r·tau)`
#[must_use]
pub fn profit_simple(s0: f64, st: f64, r: f64, tau: f64) -> f64 {
    st - s0 * (r * tau).exp()
}

/// Profit including payouts collected and an all-in acquisition cost.
///
/// `st + payouts - cost · e^(r·tau)`
///
/// `payouts` is the value at `tau` of everything the position paid out
/// over the holding period; `cost` is the full upfront outlay carried
/// forward at the financing rate.
#[must_use]
pub fn profit_with_costs(st: f64, payouts: f64, cost: f64, r: f64, tau: f64) -> f64 {
    st + payouts - cost * (r * tau).exp()
}
