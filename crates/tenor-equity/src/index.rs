//! Equity index construction.

use tenor_core::{TenorError, TenorResult};

/// Price-weighted index level: sum of prices over the index divisor.
///
/// # Errors
///
/// The divisor must be nonzero.
pub fn index_price_weighted(prices: &[f64], divisor: f64) -> TenorResult<f64> {
    if divisor == 0.0 {
        return Err(TenorError::invalid_input("index divisor must be nonzero"));
    }
    Ok(prices.iter().sum::<f64>() / divisor)
}

/// Capitalization-weighted index level.
///
/// Scales the previous level by the ratio of total market cap now to
/// total market cap before, with `adjustment` added to the denominator
/// for capitalization changes (new listings, buybacks) that should not
/// move the index.
///
/// # Errors
///
/// The constituent lists must be the same nonempty length.
pub fn index_cap_weighted(
    prev_index: f64,
    caps_now: &[f64],
    caps_prev: &[f64],
    adjustment: f64,
) -> TenorResult<f64> {
    check_constituents(caps_now, caps_prev)?;
    let denominator = caps_prev.iter().sum::<f64>() + adjustment;
    Ok(prev_index * (caps_now.iter().sum::<f64>() / denominator))
}

/// Value Line geometric index: previous level times the geometric mean of
/// the constituent price relatives.
///
/// # Errors
///
/// The price lists must be the same nonempty length.
pub fn index_value_line_geometric(
    prev_index: f64,
    prices_now: &[f64],
    prices_prev: &[f64],
) -> TenorResult<f64> {
    check_constituents(prices_now, prices_prev)?;
    let n = prices_now.len() as f64;
    let product: f64 = prices_now
        .iter()
        .zip(prices_prev)
        .map(|(now, prev)| now / prev)
        .product();
    Ok(prev_index * product.powf(1.0 / n))
}

/// Value Line arithmetic index: previous level times the arithmetic mean
/// of the constituent price relatives.
///
/// # Errors
///
/// The price lists must be the same nonempty length.
pub fn index_value_line_arithmetic(
    prev_index: f64,
    prices_now: &[f64],
    prices_prev: &[f64],
) -> TenorResult<f64> {
    check_constituents(prices_now, prices_prev)?;
    let n = prices_now.len() as f64;
    let total: f64 = prices_now
        .iter()
        .zip(prices_prev)
        .map(|(now, prev)| now / prev)
        .sum();
    Ok(prev_index * (total / n))
}

/// Constituent lists must pair off one-to-one and be nonempty.
fn check_constituents(now: &[f64], prev: &[f64]) -> TenorResult<()> {
    if now.is_empty() {
        return Err(TenorError::invalid_input("constituent list is empty"));
    }
    if now.len() != prev.len() {
        return Err(TenorError::invalid_input(format!(
            "constituent lists differ in length: {} vs {}",
            now.len(),
            prev.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_price_weighted() {
        assert_relative_eq!(
            index_price_weighted(&[10.0, 20.0, 30.0], 3.0).unwrap(),
            20.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_price_weighted_zero_divisor_rejected() {
        assert!(index_price_weighted(&[10.0, 20.0], 0.0).is_err());
    }

    #[test]
    fn test_cap_weighted() {
        // Market cap grew 10%, no adjustment
        let level =
            index_cap_weighted(100.0, &[550.0, 550.0], &[500.0, 500.0], 0.0).unwrap();
        assert_relative_eq!(level, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cap_weighted_adjustment_dampens() {
        // A listing adjustment in the base keeps the index from rising
        let unadjusted =
            index_cap_weighted(100.0, &[1100.0], &[1000.0], 0.0).unwrap();
        let adjusted =
            index_cap_weighted(100.0, &[1100.0], &[1000.0], 100.0).unwrap();
        assert!(adjusted < unadjusted);
        assert_relative_eq!(adjusted, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_value_line_geometric() {
        // Relatives 1.21 and 1.0: geometric mean 1.1
        let level =
            index_value_line_geometric(100.0, &[121.0, 50.0], &[100.0, 50.0]).unwrap();
        assert_relative_eq!(level, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_value_line_arithmetic() {
        // Relatives 1.2 and 1.0: arithmetic mean 1.1
        let level =
            index_value_line_arithmetic(100.0, &[120.0, 50.0], &[100.0, 50.0]).unwrap();
        assert_relative_eq!(level, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_geometric_below_arithmetic() {
        // AM-GM: the geometric index never beats the arithmetic one
        let now = [130.0, 90.0, 105.0];
        let prev = [100.0, 100.0, 100.0];
        let geo = index_value_line_geometric(100.0, &now, &prev).unwrap();
        let arith = index_value_line_arithmetic(100.0, &now, &prev).unwrap();
        assert!(geo < arith);
    }

    #[test]
    fn test_mismatched_lists_rejected() {
        assert!(index_value_line_geometric(100.0, &[1.0], &[1.0, 2.0]).is_err());
        assert!(index_cap_weighted(100.0, &[], &[], 0.0).is_err());
    }
}
