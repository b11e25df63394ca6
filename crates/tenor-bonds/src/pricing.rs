//! Bond pricing under an arbitrary term structure.

use tenor_core::term::TermStructure;
use tenor_core::TenorResult;
use tenor_rates::discount_factor;

use crate::schedule::generate_cashflows;

/// Present value of a fixed-rate bullet bond under a deterministic curve.
///
/// The schedule is generated once, then each cashflow is discounted at the
/// zero rate the curve quotes for that cashflow's time:
///
/// ```text
/// price = Σ cf · (1 + curve(t)/m)^(-m·t)
/// ```
///
/// The curve must quote annualized zero rates on the *same* compounding
/// basis `m` as the bond. Queries are not cached: the curve is invoked
/// once per cashflow on every call, so it must be idempotent and
/// side-effect-free.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::price_fixed_rate_bond;
/// use tenor_core::term::Flat;
///
/// // A bond priced on a flat curve at its own coupon rate is at par
/// let price = price_fixed_rate_bond(1000.0, 0.05, 2, 2.0, &Flat::new(0.05)).unwrap();
/// assert!((price - 1000.0).abs() < 1e-6);
/// ```
pub fn price_fixed_rate_bond(
    face: f64,
    coupon_rate: f64,
    m: u32,
    n_years: f64,
    curve: &impl TermStructure,
) -> TenorResult<f64> {
    let schedule = generate_cashflows(face, coupon_rate, m, n_years)?;

    let price = schedule
        .iter()
        .map(|cf| cf.amount * discount_factor(curve.zero_rate(cf.time), m, cf.time))
        .sum();
    Ok(price)
}
