//! Cashflow schedule generation.

use tenor_core::types::{Cashflow, CashflowSchedule};
use tenor_core::{TenorError, TenorResult};

/// Generates the payment schedule for a fixed-rate bullet bond.
///
/// Produces one event per coupon period at times `1/m, 2/m, …, n/m`, each
/// paying `coupon_rate · face / m`, with the full face value folded into
/// the final event. Regular schedule only: no stubs, no amortization.
///
/// The payment count is `round(n_years · m)`, rounded to the nearest
/// integer with ties away from zero. For tenors that are not a whole
/// number of periods this silently stretches or shrinks the effective
/// tenor to the nearest period boundary (`n_years = 2.3, m = 2` gives 5
/// payments spanning 2.5 years), a known approximation of the regular
/// schedule model.
///
/// # Errors
///
/// - `m == 0` or a non-positive face value is an invalid bond
///   specification.
/// - A tenor whose payment count rounds to zero is rejected rather than
///   producing an empty schedule.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::generate_cashflows;
///
/// let schedule = generate_cashflows(1000.0, 0.05, 2, 2.0).unwrap();
/// let flows: Vec<(f64, f64)> = schedule.iter().map(|cf| (cf.time, cf.amount)).collect();
/// assert_eq!(flows, vec![(0.5, 25.0), (1.0, 25.0), (1.5, 25.0), (2.0, 1025.0)]);
/// ```
pub fn generate_cashflows(
    face: f64,
    coupon_rate: f64,
    m: u32,
    n_years: f64,
) -> TenorResult<CashflowSchedule> {
    if m == 0 {
        return Err(TenorError::invalid_bond_spec(
            "compounding frequency must be at least 1",
        ));
    }
    if !face.is_finite() || face <= 0.0 {
        return Err(TenorError::invalid_bond_spec(format!(
            "face value must be positive, got {face}"
        )));
    }

    let periods = (n_years * f64::from(m)).round();
    if periods.is_nan() || periods < 1.0 {
        return Err(TenorError::invalid_tenor(n_years, m));
    }
    let n = periods as usize;

    let dt = 1.0 / f64::from(m);
    let coupon = coupon_rate * face / f64::from(m);

    let mut schedule = CashflowSchedule::with_capacity(n);
    for k in 1..=n {
        let amount = if k == n { coupon + face } else { coupon };
        schedule.push(Cashflow::new(k as f64 * dt, amount));
    }
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_semi_annual_two_years() {
        let schedule = generate_cashflows(1000.0, 0.05, 2, 2.0).unwrap();

        assert_eq!(schedule.len(), 4);
        let flows: Vec<(f64, f64)> = schedule.iter().map(|cf| (cf.time, cf.amount)).collect();
        assert_eq!(
            flows,
            vec![(0.5, 25.0), (1.0, 25.0), (1.5, 25.0), (2.0, 1025.0)]
        );
    }

    #[test]
    fn test_single_period() {
        let schedule = generate_cashflows(100.0, 0.04, 1, 1.0).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_relative_eq!(schedule.last().unwrap().amount, 104.0);
    }

    #[test]
    fn test_zero_coupon_amounts() {
        let schedule = generate_cashflows(100.0, 0.0, 2, 3.0).unwrap();

        assert_eq!(schedule.len(), 6);
        assert!(schedule.iter().take(5).all(|cf| cf.amount == 0.0));
        assert_relative_eq!(schedule.last().unwrap().amount, 100.0);
    }

    #[test]
    fn test_fractional_tenor_rounds() {
        // 2.3y at m=2 rounds to 5 periods spanning 2.5 years
        let schedule = generate_cashflows(1000.0, 0.06, 2, 2.3).unwrap();

        assert_eq!(schedule.len(), 5);
        assert_relative_eq!(schedule.last().unwrap().time, 2.5);
    }

    #[test]
    fn test_times_strictly_increasing() {
        let schedule = generate_cashflows(1000.0, 0.05, 12, 7.0).unwrap();

        let times: Vec<f64> = schedule.iter().map(|cf| cf.time).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tiny_tenor_rejected() {
        let result = generate_cashflows(1000.0, 0.05, 2, 0.1);
        assert!(matches!(result, Err(TenorError::InvalidTenor { .. })));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let result = generate_cashflows(1000.0, 0.05, 0, 2.0);
        assert!(matches!(result, Err(TenorError::InvalidBondSpec { .. })));
    }

    #[test]
    fn test_negative_face_rejected() {
        let result = generate_cashflows(-1000.0, 0.05, 2, 2.0);
        assert!(matches!(result, Err(TenorError::InvalidBondSpec { .. })));
    }
}
