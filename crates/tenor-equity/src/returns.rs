//! Equity return calculations.

use tenor_core::{TenorError, TenorResult};

/// Simple (arithmetic) return between two prices.
///
/// `price / prev_price - 1`
///
/// # Errors
///
/// The previous price must be nonzero.
///
/// # Example
///
/// ```rust
/// use tenor_equity::return_simple;
///
/// let r = return_simple(110.0, 100.0).unwrap();
/// assert!((r - 0.10).abs() < 1e-12);
/// ```
pub fn return_simple(price: f64, prev_price: f64) -> TenorResult<f64> {
    if prev_price == 0.0 {
        return Err(TenorError::invalid_input("previous price must be nonzero"));
    }
    Ok(price / prev_price - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positive_return() {
        assert_relative_eq!(return_simple(110.0, 100.0).unwrap(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_return() {
        assert_relative_eq!(return_simple(90.0, 100.0).unwrap(), -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_previous_price_rejected() {
        assert!(matches!(
            return_simple(110.0, 0.0),
            Err(TenorError::InvalidInput { .. })
        ));
    }
}
